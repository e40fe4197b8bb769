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

//! # Graph search algorithms.
//!
//! The searches are implemented as iterators over the reachable vertices.
//! Each iteration returns the next vertex together with its predecessor on
//! the search tree, so the whole tree can be reconstructed with
//! [`path_from_predecessors`].

pub mod bfs;
pub mod dfs;

use std::iter::Iterator;

/// Compute a path from a map of predecessors.
///
/// # Parameters
/// - `dst`: the destination vertex
/// - `pred(v)`: return the predecessor of `v` (or `None` if `v` is the
///   root of the search tree)
///
/// # Return
/// An iterator over the vertices of the path starting at `dst` and ending
/// at the root.
///
/// # Example
///
/// ```
/// use rs_flownet::Graph;
/// use rs_flownet::adjacencies::OutEdges;
/// use rs_flownet::search::{bfs, path_from_predecessors};
/// use rs_flownet::weight::NumWeights;
/// use std::collections::{HashMap, VecDeque};
///
/// let g = Graph::from_edges((0..6).map(|i| (i, i + 1, 1)), NumWeights::new()).unwrap();
///
/// let mut pred = HashMap::new();
/// let src = g.key(&0).unwrap();
/// bfs::start_with_data(OutEdges(&g), src, (&mut pred, VecDeque::new())).run();
///
/// let path = path_from_predecessors(&3, |u| pred.get(u).copied()).collect::<Vec<_>>();
/// assert_eq!(path, vec![&3, &2, &1, &0]);
/// ```
pub fn path_from_predecessors<N, P>(dst: N, pred: P) -> impl Iterator<Item = N>
where
    N: Copy,
    P: Fn(N) -> Option<N>,
{
    PathIter { pred, u: Some(dst) }
}

struct PathIter<N, P> {
    pred: P,
    u: Option<N>,
}

impl<N, P> Iterator for PathIter<N, P>
where
    N: Copy,
    P: Fn(N) -> Option<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let u = self.u?;
        self.u = (self.pred)(u);
        Some(u)
    }
}
