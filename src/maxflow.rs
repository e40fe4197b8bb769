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

//! Maximum flows and minimum cuts.
//!
//! The maximum flow problem asks for a flow of maximal value from a source
//! vertex to a sink vertex in a network whose edge weights are capacities.
//! This module implements the algorithm of Edmonds and Karp: starting from
//! the zero flow, flow is repeatedly sent along a shortest augmenting path
//! in the [`ResidualGraph`] until the sink is no longer reachable. The final
//! residual graph yields a minimum cut of the same value.
//!
//! All arithmetic on capacities is performed by a
//! [`WeightOperator`][crate::weight::WeightOperator].

mod augment;
mod edmondskarp;
mod mincut;
mod residual;

pub use self::augment::{find_augmenting_path, Path};
pub use self::edmondskarp::{max_flow, max_flow_with_residual, EdmondsKarp, State};
pub use self::mincut::{crossing_edges, cut_edges, min_cut, source_side};
pub use self::residual::ResidualGraph;
