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

//! Minimal cuts from maximal flows.
//!
//! Once no augmenting path exists, the vertices reachable from the source
//! in the residual graph form the source side of a minimal cut. The edges of
//! the network leaving this set are saturated and their total capacity
//! equals the value of the maximal flow.
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::maxflow::{max_flow, min_cut};
//! use rs_flownet::weight::NumWeights;
//!
//! let op = NumWeights::<u64>::new();
//! let g = Graph::from_edges(
//!     vec![("s", "a", 3), ("s", "b", 2), ("a", "b", 5), ("a", "t", 2), ("b", "t", 3)],
//!     op,
//! )
//! .unwrap();
//!
//! let cut = min_cut(&g, &"s", &"t", op).unwrap();
//! let capacity: u64 = cut.iter().map(|(u, v)| g.weight(u, v).unwrap()).sum();
//! assert_eq!(capacity, max_flow(&g, &"s", &"t", op).unwrap());
//! ```

use super::edmondskarp::max_flow_with_residual;
use super::ResidualGraph;
use crate::collections::ItemSet;
use crate::error::Result;
use crate::graph::Graph;
use crate::search::dfs;
use crate::weight::WeightOperator;

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Return the vertices reachable from the source in the residual graph.
///
/// Only edges with positive residual capacity are followed. The source
/// itself is always contained.
pub fn source_side<K, W>(residual: &ResidualGraph<K, W>) -> HashSet<&K>
where
    K: Eq + Hash,
    W: Ord,
{
    let src = residual.source();
    let mut side = HashSet::new();
    side.insert(src);
    side.extend(dfs::start(residual.positive(), src).map(|(v, _)| v));
    side
}

/// Return the edges of `g` leaving the vertex set `side`.
pub fn crossing_edges<'a, K, W, S>(g: &'a Graph<K, W>, side: &S) -> Vec<(K, K)>
where
    K: Clone + Eq + Hash,
    S: ItemSet<&'a K>,
{
    g.edges()
        .filter(|&(u, v, _)| side.contains(u) && !side.contains(v))
        .map(|(u, v, _)| (u.clone(), v.clone()))
        .collect()
}

/// Return the edges of a minimal cut of `g` given the final residual graph
/// of a maximal flow.
pub fn cut_edges<K, W>(g: &Graph<K, W>, residual: &ResidualGraph<K, W>) -> Vec<(K, K)>
where
    K: Clone + Eq + Hash,
    W: Ord,
{
    crossing_edges(g, &source_side(residual))
}

/// Compute the edges of a minimal `src`-`snk`-cut in `g`.
///
/// The order of the edges is unspecified. If `src == snk` the cut is
/// empty.
pub fn min_cut<K, W, O>(g: &Graph<K, W>, src: &K, snk: &K, op: O) -> Result<Vec<(K, K)>>
where
    K: Clone + Eq + Hash + Debug,
    W: Clone + Ord + Debug,
    O: WeightOperator<W>,
{
    let (_, residual) = max_flow_with_residual(g, src, snk, op)?;
    Ok(residual.map(|r| cut_edges(g, &r)).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{crossing_edges, min_cut, source_side};
    use crate::maxflow::max_flow_with_residual;
    use crate::weight::NumWeights;
    use crate::Graph;
    use std::collections::HashSet;

    #[test]
    fn test_source_side() {
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(vec![(0, 1, 1), (1, 2, 5), (0, 3, 4), (3, 2, 1)], op).unwrap();
        let (value, residual) = max_flow_with_residual(&g, &0, &2, op).unwrap();
        assert_eq!(value, 2);
        let residual = residual.unwrap();
        let side = source_side(&residual);
        assert_eq!(side, vec![&0, &3].into_iter().collect::<HashSet<_>>());

        let mut cut = crossing_edges(&g, &side);
        cut.sort();
        assert_eq!(cut, vec![(0, 1), (3, 2)]);
    }

    #[test]
    fn test_same_terminals() {
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(vec![(0, 1, 1)], op).unwrap();
        assert_eq!(min_cut(&g, &0, &0, op), Ok(vec![]));
    }

    #[test]
    fn test_long_chain() {
        // deep residual graphs must not overflow the stack
        let n = 50_000;
        let op = NumWeights::<u32>::new();
        let g = Graph::from_edges((0..n).map(|i| (i, i + 1, if i == n - 1 { 1 } else { 2 })), op).unwrap();
        assert_eq!(min_cut(&g, &0, &n, op), Ok(vec![(n - 1, n)]));
    }
}
