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

//! Container interfaces used by the search and flow algorithms.
//!
//! The algorithms only need a few operations of their auxiliary data
//! structures. These are collected in small traits so that callers may
//! supply their own (and reuse them between runs). Implementations for the
//! standard containers are provided.

mod map;
mod queue;
mod set;
mod stack;

pub use self::map::ItemMap;
pub use self::queue::ItemQueue;
pub use self::set::ItemSet;
pub use self::stack::ItemStack;
