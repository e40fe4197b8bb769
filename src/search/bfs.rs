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

//! Breadth-first-search.
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::adjacencies::OutEdges;
//! use rs_flownet::search::bfs;
//! use rs_flownet::weight::NumWeights;
//!
//! let g = Graph::from_edges(
//!     vec![('a', 'b', 1), ('a', 'c', 1), ('b', 'd', 1), ('c', 'd', 1), ('e', 'a', 1)],
//!     NumWeights::new(),
//! )
//! .unwrap();
//!
//! let a = g.key(&'a').unwrap();
//! let mut depth = std::collections::HashMap::new();
//! depth.insert(a, 0);
//! for (v, u) in bfs::start(OutEdges(&g), a) {
//!     let d = depth[u] + 1;
//!     depth.insert(v, d);
//! }
//! assert_eq!(depth.len(), 4);
//! assert_eq!(depth[&'d'], 2);
//! assert!(!depth.contains_key(&'e'));
//! ```

use crate::adjacencies::Adjacencies;
use crate::collections::{ItemMap, ItemQueue};
use std::collections::{HashMap, VecDeque};

/// BFS iterator with default data structures.
pub type BFSDefault<'a, A> = BFS<
    'a,
    A,
    HashMap<&'a <A as Adjacencies<'a>>::Key, &'a <A as Adjacencies<'a>>::Key>,
    VecDeque<&'a <A as Adjacencies<'a>>::Key>,
>;

/// The default data structures for BFS.
pub type DefaultData<'a, K> = (HashMap<&'a K, &'a K>, VecDeque<&'a K>);

/// Start and return a BFS iterator using default data structures.
///
/// This is a convenience wrapper around [`start_with_data`] using the default
/// data structures [`DefaultData`].
pub fn start<'a, A>(adj: A, src: &'a A::Key) -> BFSDefault<'a, A>
where
    A: Adjacencies<'a>,
{
    start_with_data(adj, src, (HashMap::new(), VecDeque::new()))
}

/// Start and return a BFS iterator with user defined data structures.
///
/// The returned iterator visits the vertices reachable from `src` in
/// breadth-first order. Each item is a pair `(v, u)` of the visited vertex
/// `v` and its predecessor `u`, hence the path from `src` to `v` along
/// the predecessors has the fewest possible number of edges.
///
/// Note that the start vertex is *not* returned by the iterator.
///
/// The map stores the predecessor of each visited vertex, the queue holds
/// the vertices whose edges have not been scanned yet. Both are cleared
/// before the search starts and may be reused for multiple searches.
pub fn start_with_data<'a, A, M, Q>(adj: A, src: &'a A::Key, data: (M, Q)) -> BFS<'a, A, M, Q>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    Q: ItemQueue<&'a A::Key>,
{
    let (mut pred, mut queue) = data;
    pred.clear();
    queue.clear();
    let it = adj.neigh_iter(src);

    BFS {
        adj,
        src,
        pred,
        queue,
        current: src,
        it,
    }
}

/// The BFS iterator.
pub struct BFS<'a, A, M, Q>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    Q: ItemQueue<&'a A::Key>,
{
    adj: A,
    src: &'a A::Key,
    pred: M,
    queue: Q,
    current: &'a A::Key,
    it: A::Iter,
}

impl<'a, A, M, Q> Iterator for BFS<'a, A, M, Q>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    Q: ItemQueue<&'a A::Key>,
{
    type Item = (&'a A::Key, &'a A::Key);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for (v, _) in self.it.by_ref() {
                if v != self.src && self.pred.insert(v, self.current) {
                    self.queue.push(v);
                    return Some((v, self.current));
                }
            }
            let u = self.queue.pop()?;
            self.current = u;
            self.it = self.adj.neigh_iter(u);
        }
    }
}

impl<'a, A, M, Q> BFS<'a, A, M, Q>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    Q: ItemQueue<&'a A::Key>,
{
    /// Run the bfs completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the data structures used in the search.
    pub fn into_data(self) -> (M, Q) {
        (self.pred, self.queue)
    }

    /// Return the predecessor of a visited vertex.
    pub fn predecessor(&self, v: &'a A::Key) -> Option<&'a A::Key> {
        self.pred.get(v).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::start;
    use crate::adjacencies::{Adjacencies, OutEdges};
    use crate::weight::NumWeights;
    use crate::Graph;

    #[test]
    fn test_fewest_edges() {
        // long path 0-1-2-3-4 and shortcut 0-5-4
        let g = Graph::from_edges(
            vec![(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (0, 5, 1), (5, 4, 1)],
            NumWeights::<i32>::new(),
        )
        .unwrap();
        let src = g.key(&0).unwrap();
        let mut bfs = start(OutEdges(&g), src);
        bfs.run();
        assert_eq!(bfs.predecessor(&4), Some(&5));
        assert_eq!(bfs.predecessor(&5), Some(&0));
        assert_eq!(bfs.predecessor(&0), None);
    }

    #[test]
    fn test_filtered() {
        let g = Graph::from_edges(vec![(0, 1, 0), (0, 2, 1), (2, 1, 1)], NumWeights::<i32>::new()).unwrap();
        let src = g.key(&0).unwrap();
        let visited = start(OutEdges(&g).filter(|&(_, &w)| w > 0), src).collect::<Vec<_>>();
        assert_eq!(visited, vec![(&2, &0), (&1, &2)]);
    }

    #[test]
    fn test_self_loop() {
        let g = Graph::from_edges(vec![(0, 0, 1), (0, 1, 1)], NumWeights::<i32>::new()).unwrap();
        let src = g.key(&0).unwrap();
        assert_eq!(start(OutEdges(&g), src).count(), 1);
    }
}
