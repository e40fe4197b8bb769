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

//! A weighted directed graph with user defined vertex keys.
//!
//! Vertices are identified by an arbitrary hashable key. Each vertex stores
//! its outgoing edges as a map from the key of the target vertex to the
//! weight of the edge. Hence there is at most one edge from `u` to `v`.
//! Vertices refer to each other only by key, the graph is the sole owner of
//! all vertices.
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::weight::NumWeights;
//!
//! let op = NumWeights::<u32>::new();
//! let mut g = Graph::new();
//! g.add_vertex("a").unwrap();
//! g.add_vertex("b").unwrap();
//! g.add_edge("a", "b", 3, &op).unwrap();
//!
//! assert!(g.has_edge(&"a", &"b"));
//! assert!(!g.has_edge(&"b", &"a"));
//! assert_eq!(g.weight(&"a", &"b"), Some(&3));
//! assert_eq!(g.num_vertices(), 2);
//! assert_eq!(g.num_edges(), 1);
//!
//! // the last write wins
//! assert_eq!(g.add_edge("a", "b", 5, &op).unwrap(), Some(3));
//! assert_eq!(g.remove_edge(&"a", &"b").unwrap(), 5);
//! assert!(g.remove_edge(&"a", &"b").is_err());
//! ```

use crate::error::{Error, Result};
use crate::weight::WeightOperator;

use either::Either;

use std::collections::hash_map::{self, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::{self, FromIterator};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
#[cfg(feature = "serialize")]
use std::convert::TryFrom;

/// Iterator over the outgoing edges `(target, weight)` of a vertex.
pub type Outgoing<'a, K, W> = Either<hash_map::Iter<'a, K, W>, iter::Empty<(&'a K, &'a W)>>;

/// A vertex of a [`Graph`].
#[derive(Clone, Debug)]
pub struct Vertex<K, W> {
    key: K,
    pub(crate) adjacency: HashMap<K, W>,
}

impl<K, W> Vertex<K, W>
where
    K: Eq + Hash,
{
    fn new(key: K) -> Self {
        Vertex {
            key,
            adjacency: HashMap::new(),
        }
    }

    /// Return the key of this vertex.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Return the weight of the edge to `target`.
    pub fn weight(&self, target: &K) -> Option<&W> {
        self.adjacency.get(target)
    }

    /// Return the number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Return an iterator over all outgoing edges as `(target, weight)`.
    pub fn outgoing(&self) -> hash_map::Iter<K, W> {
        self.adjacency.iter()
    }
}

/// A directed graph with weighted edges and vertices identified by keys.
///
/// With the `serialize` feature the graph is (de)serialized through
/// [`GraphData`], deserialization rebuilds the graph and fails on edges
/// between unknown vertices.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        try_from = "GraphData<K, W>",
        into = "GraphData<K, W>",
        bound(
            serialize = "K: serde::Serialize + Clone + Eq + Hash, W: serde::Serialize + Clone",
            deserialize = "K: serde::Deserialize<'de> + Clone + Eq + Hash + Debug, W: serde::Deserialize<'de> + Clone + Ord"
        )
    )
)]
pub struct Graph<K, W> {
    pub(crate) vertices: HashMap<K, Vertex<K, W>>,
    nedges: usize,
}

impl<K, W> Default for Graph<K, W>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Graph {
            vertices: HashMap::new(),
            nedges: 0,
        }
    }
}

impl<K, W> Graph<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Clone + Ord,
{
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Create a new, empty graph with space for `nvertices` vertices.
    pub fn with_capacity(nvertices: usize) -> Self {
        Graph {
            vertices: HashMap::with_capacity(nvertices),
            nedges: 0,
        }
    }

    /// Create a graph from a sequence of edges `(source, target, weight)`.
    ///
    /// Vertices are added implicitly when they occur for the first time. If
    /// an edge occurs more than once, the last weight wins.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_flownet::Graph;
    /// use rs_flownet::weight::NumWeights;
    ///
    /// let g = Graph::from_edges(vec![(1, 2, 4), (2, 3, 1), (1, 2, 7)], NumWeights::new()).unwrap();
    /// assert_eq!(g.num_vertices(), 3);
    /// assert_eq!(g.num_edges(), 2);
    /// assert_eq!(g.weight(&1, &2), Some(&7));
    /// ```
    pub fn from_edges<I, O>(edges: I, op: O) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K, W)>,
        O: WeightOperator<W>,
    {
        let mut g = Graph::new();
        for (u, v, w) in edges {
            if !g.contains_vertex(&u) {
                g.add_vertex(u.clone())?;
            }
            if !g.contains_vertex(&v) {
                g.add_vertex(v.clone())?;
            }
            g.add_edge(u, v, w, &op)?;
        }
        Ok(g)
    }

    /// Add a new vertex without any edges.
    ///
    /// Fails with [`Error::DuplicateVertex`] if `key` is already used.
    pub fn add_vertex(&mut self, key: K) -> Result<()> {
        match self.vertices.entry(key) {
            hash_map::Entry::Occupied(e) => Err(Error::duplicate_vertex(e.key())),
            hash_map::Entry::Vacant(e) => {
                let key = e.key().clone();
                e.insert(Vertex::new(key));
                Ok(())
            }
        }
    }

    /// Remove a vertex together with all edges from or to it.
    pub fn remove_vertex(&mut self, key: &K) -> Result<Vertex<K, W>> {
        let vertex = self.vertices.remove(key).ok_or_else(|| Error::missing_vertex(key))?;
        self.nedges -= vertex.adjacency.len();
        for u in self.vertices.values_mut() {
            if u.adjacency.remove(key).is_some() {
                self.nedges -= 1;
            }
        }
        Ok(vertex)
    }

    /// Add the edge `source -> target` with weight `weight`.
    ///
    /// An existing edge between the same vertices is replaced, its former
    /// weight is returned.
    ///
    /// Fails with [`Error::MissingVertex`] if one of the vertices does not
    /// exist and with [`Error::NegativeCapacity`] if `weight` is smaller than
    /// `op.zero()`.
    pub fn add_edge<O>(&mut self, source: K, target: K, weight: W, op: O) -> Result<Option<W>>
    where
        O: WeightOperator<W>,
    {
        if !self.vertices.contains_key(&source) {
            return Err(Error::missing_vertex(&source));
        }
        if !self.vertices.contains_key(&target) {
            return Err(Error::missing_vertex(&target));
        }
        if weight < op.zero() {
            return Err(Error::negative_capacity(&source, &target));
        }
        self.insert_edge(source, target, weight)
    }

    /// Insert or replace the edge `source -> target` without checking the
    /// weight.
    fn insert_edge(&mut self, source: K, target: K, weight: W) -> Result<Option<W>> {
        if !self.vertices.contains_key(&target) {
            return Err(Error::missing_vertex(&target));
        }
        let vertex = self
            .vertices
            .get_mut(&source)
            .ok_or_else(|| Error::missing_vertex(&source))?;
        let old = vertex.adjacency.insert(target, weight);
        if old.is_none() {
            self.nedges += 1;
        }
        Ok(old)
    }

    /// Remove the edge `source -> target` and return its weight.
    ///
    /// Fails with [`Error::MissingEdge`] if there is no such edge.
    pub fn remove_edge(&mut self, source: &K, target: &K) -> Result<W> {
        let weight = self
            .vertices
            .get_mut(source)
            .and_then(|u| u.adjacency.remove(target))
            .ok_or_else(|| Error::missing_edge(source, target))?;
        self.nedges -= 1;
        Ok(weight)
    }
}

impl<K, W> Graph<K, W>
where
    K: Eq + Hash,
{
    /// Return the vertex with the given key.
    pub fn vertex(&self, key: &K) -> Option<&Vertex<K, W>> {
        self.vertices.get(key)
    }

    /// Return `true` iff there is a vertex with the given key.
    pub fn contains_vertex(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// Return the key as stored in the graph.
    ///
    /// The returned reference lives as long as the graph, which is useful
    /// for algorithms keeping references to vertices.
    pub fn key(&self, key: &K) -> Option<&K> {
        self.vertices.get_key_value(key).map(|(k, _)| k)
    }

    /// Return `true` iff there is an edge `source -> target`.
    pub fn has_edge(&self, source: &K, target: &K) -> bool {
        self.vertices
            .get(source)
            .map(|u| u.adjacency.contains_key(target))
            .unwrap_or(false)
    }

    /// Return the weight of the edge `source -> target`.
    pub fn weight(&self, source: &K, target: &K) -> Option<&W> {
        self.vertices.get(source).and_then(|u| u.adjacency.get(target))
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.nedges
    }

    /// Return an iterator over all vertices (in no particular order).
    pub fn vertices(&self) -> hash_map::Values<K, Vertex<K, W>> {
        self.vertices.values()
    }

    /// Return an iterator over all keys (in no particular order).
    pub fn keys(&self) -> hash_map::Keys<K, Vertex<K, W>> {
        self.vertices.keys()
    }

    /// Return an iterator over the outgoing edges `(target, weight)` of a
    /// vertex.
    ///
    /// The iterator is empty if there is no vertex `key`.
    pub fn outgoing<'a>(&'a self, key: &K) -> Outgoing<'a, K, W> {
        match self.vertices.get(key) {
            Some(u) => Either::Left(u.adjacency.iter()),
            None => Either::Right(iter::empty()),
        }
    }

    /// Return an iterator over all edges `(source, target, weight)` (in no
    /// particular order).
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, &W)> + '_ {
        self.vertices
            .iter()
            .flat_map(|(u, vertex)| vertex.adjacency.iter().map(move |(v, w)| (u, v, w)))
    }

    /// Return a mutable reference to the weight of an edge.
    ///
    /// This bypasses all checks, it is only meant for algorithms that keep
    /// their own invariants (like residual graphs).
    pub(crate) fn weight_mut(&mut self, source: &K, target: &K) -> Option<&mut W> {
        self.vertices.get_mut(source).and_then(|u| u.adjacency.get_mut(target))
    }

    /// Return the weight of an edge, inserting the edge with `default` weight
    /// if necessary.
    ///
    /// The target vertex must exist.
    pub(crate) fn weight_or_insert(&mut self, source: &K, target: &K, default: W) -> Option<&mut W>
    where
        K: Clone,
    {
        let nedges = &mut self.nedges;
        let u = self.vertices.get_mut(source)?;
        Some(u.adjacency.entry(target.clone()).or_insert_with(|| {
            *nedges += 1;
            default
        }))
    }
}

impl<K, W> FromIterator<K> for Graph<K, W>
where
    K: Clone + Eq + Hash,
{
    /// Create a graph without edges from a sequence of vertex keys.
    ///
    /// Repeated keys are added only once.
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut g = Graph::default();
        for key in keys {
            g.vertices.entry(key.clone()).or_insert_with(|| Vertex::new(key));
        }
        g
    }
}

/// Serialized form of a [`Graph`]: its vertex keys and its edges
/// `(source, target, weight)`.
#[cfg(feature = "serialize")]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphData<K, W> {
    pub vertices: Vec<K>,
    pub edges: Vec<(K, K, W)>,
}

#[cfg(feature = "serialize")]
impl<K, W> From<Graph<K, W>> for GraphData<K, W>
where
    K: Clone + Eq + Hash,
{
    fn from(g: Graph<K, W>) -> Self {
        let vertices = g.vertices.keys().cloned().collect();
        let edges = g
            .vertices
            .into_iter()
            .flat_map(|(u, vertex)| vertex.adjacency.into_iter().map(move |(v, w)| (u.clone(), v, w)))
            .collect();
        GraphData { vertices, edges }
    }
}

/// Rebuild a graph from its serialized form.
///
/// Fails with [`Error::DuplicateVertex`] if a key is listed twice and with
/// [`Error::MissingVertex`] if an edge refers to an unlisted vertex. Weights
/// are not compared against a weight operator, edges with non-positive
/// capacity are ignored by the flow algorithms anyway.
#[cfg(feature = "serialize")]
impl<K, W> TryFrom<GraphData<K, W>> for Graph<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Clone + Ord,
{
    type Error = Error;

    fn try_from(data: GraphData<K, W>) -> Result<Self> {
        let mut g = Graph::with_capacity(data.vertices.len());
        for u in data.vertices {
            g.add_vertex(u)?;
        }
        for (u, v, w) in data.edges {
            g.insert_edge(u, v, w)?;
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::error::Error;
    use crate::weight::NumWeights;

    fn diamond() -> Graph<char, i32> {
        Graph::from_edges(
            vec![('s', 'a', 3), ('s', 'b', 2), ('a', 't', 2), ('b', 't', 3), ('a', 'b', 1)],
            NumWeights::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_vertex() {
        let mut g = Graph::<u32, i32>::new();
        assert_eq!(g.add_vertex(1), Ok(()));
        assert_eq!(g.add_vertex(2), Ok(()));
        assert_eq!(g.add_vertex(1), Err(Error::DuplicateVertex { key: "1".to_string() }));
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.vertex(&1).map(|u| u.out_degree()), Some(0));
        assert_eq!(g.vertex(&1).map(|u| *u.key()), Some(1));
    }

    #[test]
    fn test_add_edge_errors() {
        let op = NumWeights::<i32>::new();
        let mut g: Graph<&str, i32> = vec!["u", "v"].into_iter().collect();

        assert_eq!(
            g.add_edge("u", "w", 1, op),
            Err(Error::MissingVertex { key: "\"w\"".to_string() })
        );
        assert_eq!(
            g.add_edge("w", "u", 1, op),
            Err(Error::MissingVertex { key: "\"w\"".to_string() })
        );
        assert_eq!(
            g.add_edge("w", "u", -1, op),
            Err(Error::MissingVertex { key: "\"w\"".to_string() })
        );
        assert_eq!(
            g.add_edge("u", "w", -1, op),
            Err(Error::MissingVertex { key: "\"w\"".to_string() })
        );
        assert_eq!(
            g.add_edge("u", "v", -1, op),
            Err(Error::NegativeCapacity {
                from: "\"u\"".to_string(),
                to: "\"v\"".to_string()
            })
        );
        assert_eq!(g.num_edges(), 0);

        assert_eq!(g.add_edge("u", "v", 0, op), Ok(None));
        assert_eq!(g.add_edge("u", "v", 4, op), Ok(Some(0)));
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.weight(&"u", &"v"), Some(&4));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = diamond();
        assert_eq!(g.num_edges(), 5);
        assert_eq!(g.remove_edge(&'a', &'b'), Ok(1));
        assert!(!g.has_edge(&'a', &'b'));
        assert_eq!(g.num_edges(), 4);
        assert!(matches!(g.remove_edge(&'a', &'b'), Err(Error::MissingEdge { .. })));
        assert!(matches!(g.remove_edge(&'x', &'b'), Err(Error::MissingEdge { .. })));
    }

    #[test]
    fn test_remove_vertex() {
        let mut g = diamond();
        let a = g.remove_vertex(&'a').unwrap();
        assert_eq!(a.out_degree(), 2);
        assert_eq!(g.num_vertices(), 3);
        // s->a, a->t, a->b are gone
        assert_eq!(g.num_edges(), 2);
        assert!(g.edges().all(|(u, v, _)| *u != 'a' && *v != 'a'));
        assert!(g.remove_vertex(&'a').is_err());
    }

    #[test]
    fn test_edges() {
        let g = diamond();
        let mut edges = g.edges().map(|(&u, &v, &w)| (u, v, w)).collect::<Vec<_>>();
        edges.sort();
        assert_eq!(
            edges,
            vec![('a', 'b', 1), ('a', 't', 2), ('b', 't', 3), ('s', 'a', 3), ('s', 'b', 2)]
        );

        let mut out = g.outgoing(&'s').map(|(&v, &w)| (v, w)).collect::<Vec<_>>();
        out.sort();
        assert_eq!(out, vec![('a', 3), ('b', 2)]);
        assert_eq!(g.outgoing(&'x').count(), 0);
        assert_eq!(g.outgoing(&'t').count(), 0);
    }

    #[test]
    fn test_key_lifetime() {
        let g: Graph<String, u8> = vec!["x".to_string()].into_iter().collect();
        let k = g.key(&"x".to_string()).unwrap();
        assert_eq!(k, "x");
        assert!(g.key(&"y".to_string()).is_none());
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::diamond;
        use crate::weight::NumWeights;
        use crate::Graph;
        use serde_json;

        #[test]
        fn test_serde() {
            let g = Graph::from_edges(
                diamond()
                    .edges()
                    .map(|(u, v, &w)| (u.to_string(), v.to_string(), w))
                    .collect::<Vec<_>>(),
                NumWeights::new(),
            )
            .unwrap();
            let serialized = serde_json::to_string(&g).unwrap();
            let h: Graph<String, i32> = serde_json::from_str(&serialized).unwrap();

            assert_eq!(g.num_vertices(), h.num_vertices());
            assert_eq!(g.num_edges(), h.num_edges());
            for (u, v, w) in g.edges() {
                assert_eq!(h.weight(u, v), Some(w));
            }
        }

        #[test]
        fn test_deserialize_invalid() {
            let r = serde_json::from_str::<Graph<String, i32>>(r#"{"vertices":["a"],"edges":[["a","zz",5]]}"#);
            assert!(r.unwrap_err().to_string().contains("missing vertex \"zz\""));

            let r = serde_json::from_str::<Graph<String, i32>>(r#"{"vertices":["a","b"],"edges":[["zz","a",5]]}"#);
            assert!(r.is_err());

            let r = serde_json::from_str::<Graph<String, i32>>(r#"{"vertices":["a","a"],"edges":[]}"#);
            assert!(r.unwrap_err().to_string().contains("duplicate vertex \"a\""));
        }

        #[test]
        fn test_deserialize_counts_edges() {
            let mut g: Graph<String, i32> =
                serde_json::from_str(r#"{"vertices":["a","b"],"edges":[["a","b",5],["b","a",1],["a","b",7]]}"#)
                    .unwrap();
            assert_eq!(g.num_edges(), 2);
            assert_eq!(g.weight(&"a".to_string(), &"b".to_string()), Some(&7));
            assert_eq!(g.remove_edge(&"a".to_string(), &"b".to_string()), Ok(7));
            assert_eq!(g.remove_edge(&"b".to_string(), &"a".to_string()), Ok(1));
            assert_eq!(g.num_edges(), 0);
            assert!(g.remove_edge(&"a".to_string(), &"b".to_string()).is_err());
        }
    }
}
