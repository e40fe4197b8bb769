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

use std::collections::VecDeque;

/// A first-in-first-out queue.
pub trait ItemQueue<I> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn clear(&mut self);

    /// Append `u` at the back.
    fn push(&mut self, u: I);

    /// Remove and return the front element.
    fn pop(&mut self) -> Option<I>;
}

impl<I> ItemQueue<I> for VecDeque<I> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn push(&mut self, u: I) {
        self.push_back(u)
    }

    fn pop(&mut self) -> Option<I> {
        self.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::ItemQueue;
    use std::collections::VecDeque;

    #[test]
    fn test_fifo() {
        let mut q = VecDeque::new();
        for i in 0..4 {
            ItemQueue::push(&mut q, i);
        }
        assert_eq!(ItemQueue::len(&q), 4);
        assert_eq!(ItemQueue::pop(&mut q), Some(0));
        assert_eq!(ItemQueue::pop(&mut q), Some(1));
        ItemQueue::clear(&mut q);
        assert!(ItemQueue::is_empty(&q));
    }
}
