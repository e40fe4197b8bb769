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

/// A last-in-first-out stack.
pub trait ItemStack<I> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn clear(&mut self);

    /// Put `u` on top of the stack.
    fn push(&mut self, u: I);

    /// Remove and return the top element.
    fn pop(&mut self) -> Option<I>;

    /// Return a mutable reference to the top element.
    fn top_mut(&mut self) -> Option<&mut I>;
}

impl<I> ItemStack<I> for Vec<I> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn push(&mut self, u: I) {
        Vec::push(self, u)
    }

    fn pop(&mut self) -> Option<I> {
        Vec::pop(self)
    }

    fn top_mut(&mut self) -> Option<&mut I> {
        self.last_mut()
    }
}
