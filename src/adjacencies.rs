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

//! Abstraction of outgoing edges.
//!
//! Breadth-first and depth-first search only need to know, for each vertex,
//! the list of outgoing edges. The trait [`Adjacencies`] abstracts over this
//! access so that the searches can run on the full graph ([`OutEdges`]) as
//! well as on a subset of its edges (see [`Adjacencies::filter`]).
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::adjacencies::{Adjacencies, OutEdges};
//! use rs_flownet::weight::NumWeights;
//!
//! let g = Graph::from_edges(vec![(0, 1, 5), (0, 2, 0), (1, 2, 3)], NumWeights::new()).unwrap();
//!
//! let positive = OutEdges(&g).filter(|&(_, &w)| w > 0);
//! assert_eq!(OutEdges(&g).neigh_iter(&0).count(), 2);
//! assert_eq!(positive.neigh_iter(&0).map(|(&v, _)| v).collect::<Vec<_>>(), vec![1]);
//! ```

use crate::graph::{Graph, Outgoing};

use std::hash::Hash;

/// Access to the outgoing edges `(target, weight)` of each vertex.
///
/// The lifetime `'a` is the lifetime of the underlying graph, the returned
/// references to keys and weights live as long as the graph.
pub trait Adjacencies<'a> {
    type Key: 'a + Eq + Hash;
    type Weight: 'a;
    type Iter: Iterator<Item = (&'a Self::Key, &'a Self::Weight)>;

    /// Return an iterator over the outgoing edges of `u`.
    fn neigh_iter(&self, u: &Self::Key) -> Self::Iter;

    /// Restrict the adjacencies to the edges satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> FilterAdjacencies<Self, P>
    where
        Self: Sized,
        P: Fn(&(&'a Self::Key, &'a Self::Weight)) -> bool,
    {
        FilterAdjacencies(self, predicate)
    }
}

/// Adjacencies containing only the edges accepted by a predicate.
#[derive(Clone, Copy)]
pub struct FilterAdjacencies<A, P>(A, P);

/// Iterator over the accepted outgoing edges of a vertex.
#[derive(Clone)]
pub struct Filtered<I, P> {
    it: I,
    predicate: P,
}

impl<'a, K, W, I, P> Iterator for Filtered<I, P>
where
    K: 'a,
    W: 'a,
    I: Iterator<Item = (&'a K, &'a W)>,
    P: Fn(&(&'a K, &'a W)) -> bool,
{
    type Item = (&'a K, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &self.predicate;
        self.it.find(|it| predicate(it))
    }
}

impl<'a, A, P> Adjacencies<'a> for FilterAdjacencies<A, P>
where
    A: Adjacencies<'a>,
    P: Clone + Fn(&(&'a A::Key, &'a A::Weight)) -> bool,
{
    type Key = A::Key;
    type Weight = A::Weight;
    type Iter = Filtered<A::Iter, P>;

    fn neigh_iter(&self, u: &Self::Key) -> Self::Iter {
        Filtered {
            it: self.0.neigh_iter(u),
            predicate: self.1.clone(),
        }
    }
}

/// All outgoing edges of a [`Graph`].
pub struct OutEdges<'g, K, W>(pub &'g Graph<K, W>);

impl<'g, K, W> Clone for OutEdges<'g, K, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, K, W> Copy for OutEdges<'g, K, W> {}

impl<'g, K, W> Adjacencies<'g> for OutEdges<'g, K, W>
where
    K: 'g + Eq + Hash,
    W: 'g,
{
    type Key = K;
    type Weight = W;
    type Iter = Outgoing<'g, K, W>;

    fn neigh_iter(&self, u: &K) -> Self::Iter {
        self.0.outgoing(u)
    }
}

impl<'a, A> Adjacencies<'a> for &A
where
    A: Adjacencies<'a>,
{
    type Key = A::Key;
    type Weight = A::Weight;
    type Iter = A::Iter;

    fn neigh_iter(&self, u: &Self::Key) -> Self::Iter {
        (**self).neigh_iter(u)
    }
}
