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

//! Errors of graph operations and flow algorithms.

use std::fmt::Debug;
use thiserror::Error;

/// Error raised by graph operations and flow algorithms.
///
/// Vertex keys are stored in their `Debug` representation so that the
/// error type does not depend on the key type of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex with this key is already contained in the graph.
    #[error("duplicate vertex {key}")]
    DuplicateVertex { key: String },

    /// There is no vertex with this key.
    #[error("missing vertex {key}")]
    MissingVertex { key: String },

    /// There is no edge between the two vertices.
    #[error("missing edge {from} -> {to}")]
    MissingEdge { from: String, to: String },

    /// The capacity of an edge would be smaller than zero.
    #[error("negative capacity on edge {from} -> {to}")]
    NegativeCapacity { from: String, to: String },

    /// The weight operator signalled that an operation failed, e.g. due to
    /// an arithmetic overflow.
    #[error("weight operator failed in `{operation}`")]
    OperatorContractViolation { operation: &'static str },

    /// The number of augmentations exceeded the configured limit.
    #[error("flow computation did not terminate within {limit} augmentations")]
    IterationLimit { limit: usize },
}

impl Error {
    pub(crate) fn duplicate_vertex<K: Debug>(key: &K) -> Self {
        Error::DuplicateVertex {
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn missing_vertex<K: Debug>(key: &K) -> Self {
        Error::MissingVertex {
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn missing_edge<K: Debug>(from: &K, to: &K) -> Self {
        Error::MissingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn negative_capacity<K: Debug>(from: &K, to: &K) -> Self {
        Error::NegativeCapacity {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
