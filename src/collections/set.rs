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

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// A set of vertices, e.g. the visited vertices of a search.
pub trait ItemSet<I>
where
    I: Copy,
{
    /// Return `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements.
    fn len(&self) -> usize;

    /// Remove all elements.
    fn clear(&mut self);

    /// Add `u`, returning `true` iff it was not contained before.
    fn insert(&mut self, u: I) -> bool;

    /// Return `true` iff `u` is contained.
    fn contains(&self, u: I) -> bool;
}

impl<I, S> ItemSet<I> for HashSet<I, S>
where
    I: Copy + Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn insert(&mut self, u: I) -> bool {
        HashSet::insert(self, u)
    }

    fn contains(&self, u: I) -> bool {
        HashSet::contains(self, &u)
    }
}
