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

//! Depth-first-search.
//!
//! The search uses an explicit stack of edge iterators, so its depth is not
//! limited by the size of the call stack.
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::adjacencies::OutEdges;
//! use rs_flownet::search::dfs;
//! use rs_flownet::weight::NumWeights;
//!
//! let g = Graph::from_edges((0..100_000).map(|i| (i, i + 1, 1)), NumWeights::new()).unwrap();
//! let src = g.key(&0).unwrap();
//! assert_eq!(dfs::start(OutEdges(&g), src).count(), 100_000);
//! ```

use crate::adjacencies::Adjacencies;
use crate::collections::{ItemMap, ItemStack};
use std::collections::HashMap;

/// DFS iterator with default data structures.
pub type DFSDefault<'a, A> = DFS<
    'a,
    A,
    HashMap<&'a <A as Adjacencies<'a>>::Key, &'a <A as Adjacencies<'a>>::Key>,
    Vec<(&'a <A as Adjacencies<'a>>::Key, <A as Adjacencies<'a>>::Iter)>,
>;

/// Start and return a DFS iterator using default data structures.
pub fn start<'a, A>(adj: A, src: &'a A::Key) -> DFSDefault<'a, A>
where
    A: Adjacencies<'a>,
{
    start_with_data(adj, src, (HashMap::new(), Vec::new()))
}

/// Start and return a DFS iterator with user defined data structures.
///
/// The returned iterator visits the vertices reachable from `src` in
/// depth-first order. Each item is a pair `(v, u)` of the visited vertex
/// `v` and its predecessor `u`.
///
/// Note that the start vertex is *not* returned by the iterator.
///
/// The map stores the predecessor of each visited vertex, the stack holds
/// the partially scanned vertices together with their edge iterators.
pub fn start_with_data<'a, A, M, St>(adj: A, src: &'a A::Key, data: (M, St)) -> DFS<'a, A, M, St>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    St: ItemStack<(&'a A::Key, A::Iter)>,
{
    let (mut pred, mut stack) = data;
    pred.clear();
    stack.clear();
    stack.push((src, adj.neigh_iter(src)));

    DFS { adj, src, pred, stack }
}

/// The DFS iterator.
pub struct DFS<'a, A, M, St>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    St: ItemStack<(&'a A::Key, A::Iter)>,
{
    adj: A,
    src: &'a A::Key,
    pred: M,
    stack: St,
}

impl<'a, A, M, St> Iterator for DFS<'a, A, M, St>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    St: ItemStack<(&'a A::Key, A::Iter)>,
{
    type Item = (&'a A::Key, &'a A::Key);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((u, it)) = self.stack.top_mut() {
            let u = *u;
            match it.next() {
                Some((v, _)) => {
                    if v != self.src && self.pred.insert(v, u) {
                        self.stack.push((v, self.adj.neigh_iter(v)));
                        return Some((v, u));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<'a, A, M, St> DFS<'a, A, M, St>
where
    A: Adjacencies<'a>,
    M: ItemMap<&'a A::Key, &'a A::Key>,
    St: ItemStack<(&'a A::Key, A::Iter)>,
{
    /// Run the dfs completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the data structures used in the search.
    pub fn into_data(self) -> (M, St) {
        (self.pred, self.stack)
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
    use std::collections::HashSet;

    #[test]
    fn test_reachable() {
        let g = Graph::from_edges(
            vec![("s", "a", 1), ("a", "b", 1), ("b", "s", 1), ("c", "s", 1), ("a", "d", 0)],
            NumWeights::<u32>::new(),
        )
        .unwrap();
        let s = g.key(&"s").unwrap();

        let all = start(OutEdges(&g), s).map(|(v, _)| *v).collect::<HashSet<_>>();
        assert_eq!(all, vec!["a", "b", "d"].into_iter().collect::<HashSet<_>>());

        let positive = start(OutEdges(&g).filter(|&(_, &w)| w > 0), s)
            .map(|(v, _)| *v)
            .collect::<HashSet<_>>();
        assert_eq!(positive, vec!["a", "b"].into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_depth_first() {
        // binary tree, children are visited before siblings of the parent
        let g = Graph::from_edges(
            vec![(1, 2, 1), (1, 3, 1), (2, 4, 1), (2, 5, 1), (3, 6, 1), (3, 7, 1)],
            NumWeights::<u32>::new(),
        )
        .unwrap();
        let root = g.key(&1).unwrap();
        let mut dfs = start(OutEdges(&g), root);
        let (first, _) = dfs.next().unwrap();
        let (second, pred) = dfs.next().unwrap();
        assert_eq!(pred, first);
        assert!((*first == 2 && (*second == 4 || *second == 5)) || (*first == 3 && (*second == 6 || *second == 7)));
        dfs.run();
        assert_eq!(dfs.predecessor(&7), Some(&3));
    }
}
