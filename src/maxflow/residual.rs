/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Residual graphs of flow networks.
//!
//! A residual graph has the same vertices as the original network. For each
//! original edge `u -> v` with positive capacity it contains a forward edge
//! `u -> v` holding the remaining capacity and a backward edge `v -> u`
//! holding the flow sent so far, which may be cancelled by a later
//! augmentation.
//!
//! Both directions between two vertices share a single pair of residual
//! edges. If the network contains anti-parallel edges `u -> v` and `v -> u`
//! the capacity of each is added to the corresponding residual edge, so the
//! pair represents the remaining capacity in both directions at once.
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::maxflow::ResidualGraph;
//! use rs_flownet::weight::NumWeights;
//!
//! let op = NumWeights::<i32>::new();
//! let g = Graph::from_edges(vec![('s', 'a', 4), ('a', 't', 3), ('t', 'a', 1)], op).unwrap();
//! let r = ResidualGraph::build(&g, &'s', &'t', op).unwrap();
//!
//! assert_eq!(r.residual(&'s', &'a'), Some(&4));
//! assert_eq!(r.residual(&'a', &'s'), Some(&0));
//! assert_eq!(r.residual(&'a', &'t'), Some(&3));
//! assert_eq!(r.residual(&'t', &'a'), Some(&1));
//! assert_eq!(r.num_edges(), 4);
//! ```

use crate::adjacencies::{Adjacencies, OutEdges};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::weight::WeightOperator;

use std::fmt::Debug;
use std::hash::Hash;

/// The residual graph of a flow network.
#[derive(Clone, Debug)]
pub struct ResidualGraph<K, W> {
    graph: Graph<K, W>,
    source: K,
    sink: K,
    zero: W,
}

impl<K, W> ResidualGraph<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Clone + Ord,
{
    /// Build the residual graph of `graph` with zero flow.
    ///
    /// Fails with [`Error::MissingVertex`] if `source` or `sink` is not a
    /// vertex of `graph` and with [`Error::OperatorContractViolation`] if
    /// merging the capacities of anti-parallel edges fails.
    pub fn build<O>(graph: &Graph<K, W>, source: &K, sink: &K, op: O) -> Result<Self>
    where
        O: WeightOperator<W>,
    {
        let source = graph.key(source).ok_or_else(|| Error::missing_vertex(source))?;
        let sink = graph.key(sink).ok_or_else(|| Error::missing_vertex(sink))?;
        let zero = op.zero();

        let mut residual = Graph::with_capacity(graph.num_vertices());
        for u in graph.keys() {
            residual.add_vertex(u.clone())?;
        }

        for (u, v, cap) in graph.edges() {
            if *cap <= zero {
                continue;
            }
            if let Some(fwd) = residual.weight_or_insert(u, v, zero.clone()) {
                *fwd = op
                    .checked_add(fwd, cap)
                    .ok_or(Error::OperatorContractViolation { operation: "add" })?;
            }
            residual.weight_or_insert(v, u, zero.clone());
        }

        Ok(ResidualGraph {
            graph: residual,
            source: source.clone(),
            sink: sink.clone(),
            zero,
        })
    }

    /// Move `amount` units of flow along the residual edge `u -> v`.
    ///
    /// The residual capacity of `u -> v` decreases and the one of `v -> u`
    /// increases by `amount`.
    pub(crate) fn push<O>(&mut self, u: &K, v: &K, amount: &W, op: &O) -> Result<()>
    where
        O: WeightOperator<W>,
    {
        let fwd = self.graph.weight_mut(u, v).ok_or_else(|| Error::missing_edge(u, v))?;
        *fwd = op
            .checked_subtract(fwd, amount)
            .ok_or(Error::OperatorContractViolation { operation: "subtract" })?;
        debug_assert!(*fwd >= self.zero);

        let bwd = self.graph.weight_mut(v, u).ok_or_else(|| Error::missing_edge(v, u))?;
        *bwd = op
            .checked_add(bwd, amount)
            .ok_or(Error::OperatorContractViolation { operation: "add" })?;
        Ok(())
    }

    /// Return the flow on the edge `u -> v` of the original network.
    ///
    /// The flow is the original capacity minus the remaining residual
    /// capacity. If the network contains the anti-parallel edge `v -> u` and
    /// the net flow goes from `v` to `u`, the flow on `u -> v` is zero.
    ///
    /// Returns `None` if `u -> v` is not an edge of `original`.
    pub fn flow<O>(&self, original: &Graph<K, W>, u: &K, v: &K, op: O) -> Option<W>
    where
        O: WeightOperator<W>,
    {
        let cap = original.weight(u, v)?;
        match self.residual(u, v) {
            Some(r) if r < cap => Some(op.subtract(cap, r)),
            _ => Some(self.zero.clone()),
        }
    }
}

impl<K, W> ResidualGraph<K, W>
where
    K: Eq + Hash,
    W: Ord,
{
    /// Return the source vertex.
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Return the sink vertex.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Return the zero weight of the operator used to build this graph.
    pub fn zero(&self) -> &W {
        &self.zero
    }

    /// Return the residual capacity of the edge `u -> v`.
    pub fn residual(&self, u: &K, v: &K) -> Option<&W> {
        self.graph.weight(u, v)
    }

    /// Return `true` iff there is a residual edge `u -> v`.
    ///
    /// The residual capacity of the edge might be zero.
    pub fn has_edge(&self, u: &K, v: &K) -> bool {
        self.graph.has_edge(u, v)
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    /// Return the number of residual edges (forward and backward).
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// Return the underlying graph of residual capacities.
    pub fn as_graph(&self) -> &Graph<K, W> {
        &self.graph
    }

    /// Turn this residual graph into the underlying graph of residual
    /// capacities.
    pub fn into_graph(self) -> Graph<K, W> {
        self.graph
    }

    /// Return the adjacencies of the residual edges with positive capacity.
    pub fn positive(&self) -> impl Adjacencies<'_, Key = K, Weight = W> + Clone {
        let zero = &self.zero;
        OutEdges(&self.graph).filter(move |&(_, w)| w > zero)
    }
}

#[cfg(test)]
mod tests {
    use super::ResidualGraph;
    use crate::error::Error;
    use crate::weight::{CheckedWeights, NumWeights};
    use crate::Graph;

    #[test]
    fn test_missing_terminal() {
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(vec![(1, 2, 3)], op).unwrap();
        assert_eq!(
            ResidualGraph::build(&g, &0, &2, op).map(|_| ()),
            Err(Error::MissingVertex { key: "0".to_string() })
        );
        assert_eq!(
            ResidualGraph::build(&g, &1, &3, op).map(|_| ()),
            Err(Error::MissingVertex { key: "3".to_string() })
        );
    }

    #[test]
    fn test_zero_capacity_skipped() {
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(vec![(1, 2, 0), (2, 3, 5)], op).unwrap();
        let r = ResidualGraph::build(&g, &1, &3, op).unwrap();
        assert_eq!(r.num_vertices(), 3);
        assert!(!r.has_edge(&1, &2));
        assert!(!r.has_edge(&2, &1));
        assert_eq!(r.residual(&3, &2), Some(&0));
        assert_eq!(r.num_edges(), 2);
    }

    #[test]
    fn test_push() {
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(vec![(1, 2, 5), (2, 1, 2)], op).unwrap();
        let mut r = ResidualGraph::build(&g, &1, &2, op).unwrap();
        r.push(&1, &2, &4, &op).unwrap();
        assert_eq!(r.residual(&1, &2), Some(&1));
        assert_eq!(r.residual(&2, &1), Some(&6));
        assert_eq!(r.flow(&g, &1, &2, op), Some(4));
        assert_eq!(r.flow(&g, &2, &1, op), Some(0));
        assert_eq!(r.flow(&g, &1, &3, op), None);

        // cancel more than the forward flow: net flow goes from 2 to 1
        r.push(&2, &1, &5, &op).unwrap();
        assert_eq!(r.flow(&g, &1, &2, op), Some(0));
        assert_eq!(r.flow(&g, &2, &1, op), Some(1));
    }

    #[test]
    fn test_push_overflow() {
        let op = CheckedWeights::<u8>::new();
        let g = Graph::from_edges(vec![(1, 2, 200), (2, 1, 100)], op).unwrap();
        let mut r = ResidualGraph::build(&g, &1, &2, op).unwrap();
        assert_eq!(r.residual(&1, &2), Some(&200));
        assert_eq!(r.residual(&2, &1), Some(&100));

        // 200 + 100 does not fit into the backward edge
        assert_eq!(
            r.push(&2, &1, &100, &op),
            Err(Error::OperatorContractViolation { operation: "add" })
        );
        assert_eq!(
            r.push(&2, &1, &1, &op),
            Err(Error::OperatorContractViolation { operation: "subtract" })
        );
    }
}
