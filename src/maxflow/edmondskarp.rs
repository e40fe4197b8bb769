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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::maxflow::EdmondsKarp;
//! use rs_flownet::weight::NumWeights;
//!
//! let op = NumWeights::<u32>::new();
//! let g = Graph::from_edges(
//!     vec![
//!         ('s', 'a', 10), ('s', 'c', 10), ('a', 'b', 4), ('a', 'c', 2), ('a', 'd', 8),
//!         ('b', 't', 10), ('c', 'd', 9), ('d', 'b', 6), ('d', 't', 10),
//!     ],
//!     op,
//! )
//! .unwrap();
//!
//! let mut ek = EdmondsKarp::new(&g, op);
//! ek.solve(&'s', &'t').unwrap();
//! assert_eq!(*ek.value(), 19);
//!
//! // capacity bounds
//! assert!(g.edges().all(|(u, v, &cap)| ek.flow(u, v).map_or(false, |f| f <= cap)));
//!
//! // flow conservation
//! for &u in g.keys().filter(|&&u| u != 's' && u != 't') {
//!     let outflow: u32 = g.outgoing(&u).map(|(v, _)| ek.flow(&u, v).unwrap()).sum();
//!     let inflow: u32 = g.edges().filter(|&(_, &v, _)| v == u).map(|(w, _, _)| ek.flow(w, &u).unwrap()).sum();
//!     assert_eq!(inflow, outflow);
//! }
//!
//! let mut cut = ek.mincut();
//! cut.sort();
//! assert_eq!(cut, vec![('c', 'd'), ('s', 'a')]);
//! ```

use super::augment::{find_augmenting_path, Path};
use super::mincut::cut_edges;
use super::ResidualGraph;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::weight::WeightOperator;

use log::{debug, trace, warn};

use std::fmt::Debug;
use std::hash::Hash;

/// The states of the Edmonds-Karp algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// No computation has been started.
    Init,
    /// Looking for an augmenting path.
    Searching,
    /// Sending flow along an augmenting path.
    Augmenting,
    /// The computation has finished (successfully or not).
    Terminated,
}

/// Max-flow algorithm of Edmonds and Karp.
///
/// The algorithm works on a [`ResidualGraph`] derived from the network,
/// the network itself is never modified.
pub struct EdmondsKarp<'a, K, W, O> {
    g: &'a Graph<K, W>,
    op: O,
    residual: Option<ResidualGraph<K, W>>,
    value: W,
    state: State,
    naugmentations: usize,
    /// Maximal number of augmentations before the algorithm is aborted.
    ///
    /// If `None` the bound `|V| * |E|` of the algorithm is used. A weight
    /// operator violating its contract might otherwise keep the algorithm
    /// from terminating.
    pub max_augmentations: Option<usize>,
}

impl<'a, K, W, O> EdmondsKarp<'a, K, W, O>
where
    K: Clone + Eq + Hash + Debug,
    W: Clone + Ord + Debug,
    O: WeightOperator<W>,
{
    /// Create a new Edmonds-Karp algorithm instance for a network.
    pub fn new(g: &'a Graph<K, W>, op: O) -> Self {
        let value = op.zero();
        EdmondsKarp {
            g,
            op,
            residual: None,
            value,
            state: State::Init,
            naugmentations: 0,
            max_augmentations: None,
        }
    }

    /// Return the underlying network.
    pub fn as_graph(&self) -> &'a Graph<K, W> {
        self.g
    }

    /// Return the current state of the algorithm.
    pub fn state(&self) -> State {
        self.state
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> &W {
        &self.value
    }

    /// Return the number of augmentations of the latest computation.
    pub fn num_augmentations(&self) -> usize {
        self.naugmentations
    }

    /// Return the residual graph of the latest computed maximum flow.
    ///
    /// Returns `None` if no flow has been computed or if source and sink
    /// were equal.
    pub fn residual(&self) -> Option<&ResidualGraph<K, W>> {
        self.residual.as_ref()
    }

    /// Return the final residual graph.
    pub fn into_residual(self) -> Option<ResidualGraph<K, W>> {
        self.residual
    }

    /// Return the flow on the edge `u -> v` of the network.
    ///
    /// Returns `None` if there is no such edge.
    pub fn flow(&self, u: &K, v: &K) -> Option<W> {
        match &self.residual {
            Some(residual) => residual.flow(self.g, u, v, &self.op),
            None => self.g.weight(u, v).map(|_| self.op.zero()),
        }
    }

    /// Return the edges of a minimal cut associated with the last maximum
    /// flow.
    pub fn mincut(&self) -> Vec<(K, K)> {
        match &self.residual {
            Some(residual) => cut_edges(self.g, residual),
            None => vec![],
        }
    }

    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// If the computation fails, the residual graph is discarded and the
    /// value is reset to zero.
    pub fn solve(&mut self, src: &K, snk: &K) -> Result<()> {
        self.residual = None;
        self.value = self.op.zero();
        self.naugmentations = 0;
        self.state = State::Init;

        let result = self.run(src, snk);
        self.state = State::Terminated;

        match result {
            Ok((value, residual)) => {
                debug!(
                    "Edmonds-Karp {:?} -> {:?}: value {:?} after {} augmentations",
                    src, snk, value, self.naugmentations
                );
                self.value = value;
                self.residual = residual;
                Ok(())
            }
            Err(err) => {
                debug!("Edmonds-Karp {:?} -> {:?} failed: {}", src, snk, err);
                Err(err)
            }
        }
    }

    fn run(&mut self, src: &K, snk: &K) -> Result<(W, Option<ResidualGraph<K, W>>)> {
        if !self.g.contains_vertex(src) {
            return Err(Error::missing_vertex(src));
        }
        if !self.g.contains_vertex(snk) {
            return Err(Error::missing_vertex(snk));
        }
        if src == snk {
            return Ok((self.op.zero(), None));
        }

        let mut residual = ResidualGraph::build(self.g, src, snk, &self.op)?;
        let limit = self.max_augmentations.unwrap_or_else(|| bound(self.g));
        debug!(
            "Edmonds-Karp on {} vertices, {} edges (residual: {} edges), limit {}",
            self.g.num_vertices(),
            self.g.num_edges(),
            residual.num_edges(),
            limit
        );

        let mut value = self.op.zero();
        loop {
            self.state = State::Searching;
            let path = match find_augmenting_path(&residual) {
                Some(path) => path,
                None => break,
            };

            self.state = State::Augmenting;
            if self.naugmentations >= limit {
                warn!("Edmonds-Karp aborted after {} augmentations", self.naugmentations);
                return Err(Error::IterationLimit { limit });
            }

            let df = self.bottleneck(&residual, &path);
            debug_assert!(df > self.op.zero());

            for (u, v) in path.edges() {
                residual.push(u, v, &df, &self.op)?;
            }
            value = self
                .op
                .checked_add(&value, &df)
                .ok_or(Error::OperatorContractViolation { operation: "add" })?;
            self.naugmentations += 1;

            trace!("augmented {:?} along {} edges", df, path.len());
        }

        Ok((value, Some(residual)))
    }

    /// Return the smallest residual capacity on `path`.
    fn bottleneck(&self, residual: &ResidualGraph<K, W>, path: &Path<K>) -> W {
        let mut df = self.op.max_value();
        for (u, v) in path.edges() {
            if let Some(r) = residual.residual(u, v) {
                if *r < df {
                    df = r.clone();
                }
            }
        }
        df
    }
}

/// The bound `|V| * |E|` on the number of augmentations.
fn bound<K, W>(g: &Graph<K, W>) -> usize
where
    K: Eq + Hash,
{
    g.num_vertices().max(1).saturating_mul(g.num_edges().max(1))
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source vertex `src`
/// to the sink vertex `snk` with the edge weights of `g` as capacities and
/// returns the flow value.
pub fn max_flow<K, W, O>(g: &Graph<K, W>, src: &K, snk: &K, op: O) -> Result<W>
where
    K: Clone + Eq + Hash + Debug,
    W: Clone + Ord + Debug,
    O: WeightOperator<W>,
{
    max_flow_with_residual(g, src, snk, op).map(|(value, _)| value)
}

/// Solve the maxflow problem and return the final residual graph.
///
/// The residual graph is `None` if `src == snk`, in which case the flow
/// value is zero.
pub fn max_flow_with_residual<K, W, O>(
    g: &Graph<K, W>,
    src: &K,
    snk: &K,
    op: O,
) -> Result<(W, Option<ResidualGraph<K, W>>)>
where
    K: Clone + Eq + Hash + Debug,
    W: Clone + Ord + Debug,
    O: WeightOperator<W>,
{
    let mut maxflow = EdmondsKarp::new(g, op);
    maxflow.solve(src, snk)?;
    let value = maxflow.value().clone();
    Ok((value, maxflow.into_residual()))
}
