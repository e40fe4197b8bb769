// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! Weighted directed graphs with user defined vertex keys and maximum flow
//! algorithms on them.
//!
//! # Example
//!
//! ```
//! use rs_flownet::Graph;
//! use rs_flownet::maxflow::{max_flow, min_cut};
//! use rs_flownet::weight::NumWeights;
//!
//! let op = NumWeights::<u32>::new();
//! let mut g = Graph::new();
//! for u in &["s", "a", "t"] {
//!     g.add_vertex(*u).unwrap();
//! }
//! g.add_edge("s", "a", 5, op).unwrap();
//! g.add_edge("a", "t", 5, op).unwrap();
//!
//! assert_eq!(max_flow(&g, &"s", &"t", op).unwrap(), 5);
//! assert_eq!(min_cut(&g, &"s", &"t", op).unwrap().len(), 1);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod weight;
pub use self::weight::{CheckedWeights, NumWeights, WeightOperator};

pub mod graph;
pub use self::graph::{Graph, Vertex};

pub mod adjacencies;

pub mod collections;

// # Algorithms

pub mod maxflow;
pub mod search;
