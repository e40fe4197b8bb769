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

//! Shortest augmenting paths.
//!
//! An augmenting path is a path from the source to the sink in the residual
//! graph using only edges with positive residual capacity. Choosing a path
//! with the fewest number of edges in each step bounds the number of
//! augmentations by `O(|V| |E|)` independently of the capacities.

use super::ResidualGraph;
use crate::search::{bfs, path_from_predecessors};

use std::hash::Hash;

/// A path in a residual graph given by the sequence of its vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<K> {
    vertices: Vec<K>,
}

impl<K> Path<K> {
    /// Return the vertices of the path from source to sink.
    pub fn vertices(&self) -> &[K] {
        &self.vertices
    }

    /// Return the number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Return `true` if the path has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return an iterator over the edges `(u, v)` of the path from source to
    /// sink.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.vertices.windows(2).map(|e| (&e[0], &e[1]))
    }

    /// Return the vertices of the path.
    pub fn into_vertices(self) -> Vec<K> {
        self.vertices
    }
}

/// Find an augmenting path with the fewest number of edges.
///
/// The search is a breadth-first-search from the source of `residual` along
/// edges with positive residual capacity. It stops as soon as the sink has
/// been reached. Returns `None` if the sink is not reachable.
///
/// # Example
///
/// ```
/// use rs_flownet::Graph;
/// use rs_flownet::maxflow::{find_augmenting_path, ResidualGraph};
/// use rs_flownet::weight::NumWeights;
///
/// let op = NumWeights::<u32>::new();
/// let g = Graph::from_edges(
///     vec![('s', 'a', 1), ('a', 'b', 1), ('b', 't', 1), ('s', 'c', 1), ('c', 't', 1)],
///     op,
/// )
/// .unwrap();
/// let r = ResidualGraph::build(&g, &'s', &'t', op).unwrap();
///
/// let path = find_augmenting_path(&r).unwrap();
/// assert_eq!(path.vertices(), &['s', 'c', 't']);
/// assert_eq!(path.len(), 2);
/// ```
pub fn find_augmenting_path<K, W>(residual: &ResidualGraph<K, W>) -> Option<Path<K>>
where
    K: Clone + Eq + Hash,
    W: Ord,
{
    let src = residual.source();
    let snk = residual.sink();
    if src == snk {
        return None;
    }

    let mut search = bfs::start(residual.positive(), src);
    if !search.any(|(v, _)| v == snk) {
        return None;
    }

    let mut vertices = path_from_predecessors(snk, |v| search.predecessor(v))
        .cloned()
        .collect::<Vec<_>>();
    vertices.reverse();
    debug_assert!(vertices.first() == Some(src));

    Some(Path { vertices })
}

#[cfg(test)]
mod tests {
    use super::find_augmenting_path;
    use crate::maxflow::ResidualGraph;
    use crate::weight::NumWeights;
    use crate::Graph;

    #[test]
    fn test_unreachable() {
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(vec![(0, 1, 2), (2, 3, 2)], op).unwrap();
        let r = ResidualGraph::build(&g, &0, &3, op).unwrap();
        assert_eq!(find_augmenting_path(&r), None);
    }

    #[test]
    fn test_saturated_edges_ignored() {
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(vec![(0, 1, 2), (1, 3, 2), (0, 2, 1), (2, 4, 1), (4, 3, 1)], op).unwrap();
        let mut r = ResidualGraph::build(&g, &0, &3, op).unwrap();
        assert_eq!(find_augmenting_path(&r).map(|p| p.into_vertices()), Some(vec![0, 1, 3]));

        r.push(&0, &1, &2, &op).unwrap();
        r.push(&1, &3, &2, &op).unwrap();
        let path = find_augmenting_path(&r).unwrap();
        assert_eq!(path.vertices(), &[0, 2, 4, 3]);
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![(&0, &2), (&2, &4), (&4, &3)]);
    }

    #[test]
    fn test_backward_edge() {
        // the only augmenting path after the first one uses the reverse of a->b
        let op = NumWeights::<i32>::new();
        let g = Graph::from_edges(
            vec![('s', 'a', 1), ('s', 'b', 1), ('a', 'b', 1), ('a', 't', 1), ('b', 't', 1)],
            op,
        )
        .unwrap();
        let mut r = ResidualGraph::build(&g, &'s', &'t', op).unwrap();
        for (u, v) in &[('s', 'a'), ('a', 'b'), ('b', 't')] {
            r.push(u, v, &1, &op).unwrap();
        }
        let path = find_augmenting_path(&r).unwrap();
        assert_eq!(path.vertices(), &['s', 'b', 'a', 't']);
    }
}
