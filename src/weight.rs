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

//! Arithmetic on edge weights.
//!
//! The weight type of a graph is only required to be totally ordered. All
//! arithmetic needed by the algorithms is provided by a separate
//! [`WeightOperator`] that is passed to each algorithm.
//!
//! # Example
//!
//! ```
//! use rs_flownet::weight::{CheckedWeights, NumWeights, WeightOperator};
//!
//! let op = NumWeights::<i64>::new();
//! assert_eq!(op.add(&3, &4), 7);
//! assert_eq!(op.subtract(&7, &4), 3);
//! assert_eq!(op.zero(), 0);
//!
//! let op = CheckedWeights::<u8>::new();
//! assert_eq!(op.checked_add(&200, &55), Some(255));
//! assert_eq!(op.checked_add(&200, &56), None);
//! ```

use crate::num::traits::{Bounded, CheckedAdd, CheckedSub, Num, Zero};

use std::fmt;
use std::marker::PhantomData;

/// Arithmetic capability for a weight type `W`.
///
/// Implementations must satisfy
///
/// - `zero()` is the additive identity,
/// - `subtract(add(a, b), b) == a` for all non-negative `a`, `b` in the
///   valid capacity range,
/// - `max_value()` is at least as large as every capacity in use.
///
/// The algorithms do not validate these properties.
pub trait WeightOperator<W> {
    /// The additive identity (and the default weight).
    fn zero(&self) -> W;

    /// A sentinel that is larger than any real capacity.
    fn max_value(&self) -> W;

    /// Return `a + b`.
    fn add(&self, a: &W, b: &W) -> W;

    /// Return `a - b`.
    fn subtract(&self, a: &W, b: &W) -> W;

    /// Return `a + b` or `None` if the result is not representable.
    ///
    /// The default implementation never fails.
    fn checked_add(&self, a: &W, b: &W) -> Option<W> {
        Some(self.add(a, b))
    }

    /// Return `a - b` or `None` if the result is not representable.
    ///
    /// The default implementation never fails.
    fn checked_subtract(&self, a: &W, b: &W) -> Option<W> {
        Some(self.subtract(a, b))
    }
}

impl<'a, W, O> WeightOperator<W> for &'a O
where
    O: WeightOperator<W> + ?Sized,
{
    fn zero(&self) -> W {
        (**self).zero()
    }

    fn max_value(&self) -> W {
        (**self).max_value()
    }

    fn add(&self, a: &W, b: &W) -> W {
        (**self).add(a, b)
    }

    fn subtract(&self, a: &W, b: &W) -> W {
        (**self).subtract(a, b)
    }

    fn checked_add(&self, a: &W, b: &W) -> Option<W> {
        (**self).checked_add(a, b)
    }

    fn checked_subtract(&self, a: &W, b: &W) -> Option<W> {
        (**self).checked_subtract(a, b)
    }
}

/// Weight operator using the plain arithmetic of a numeric type.
///
/// Overflow behaves like the underlying operators of `T`.
pub struct NumWeights<T>(PhantomData<fn() -> T>);

impl<T> NumWeights<T> {
    pub fn new() -> Self {
        NumWeights(PhantomData)
    }
}

impl<T> Default for NumWeights<T> {
    fn default() -> Self {
        NumWeights::new()
    }
}

impl<T> Clone for NumWeights<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NumWeights<T> {}

impl<T> fmt::Debug for NumWeights<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "NumWeights<{}>", std::any::type_name::<T>())
    }
}

impl<T> WeightOperator<T> for NumWeights<T>
where
    T: Num + Bounded + Clone,
{
    fn zero(&self) -> T {
        T::zero()
    }

    fn max_value(&self) -> T {
        T::max_value()
    }

    fn add(&self, a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }

    fn subtract(&self, a: &T, b: &T) -> T {
        a.clone() - b.clone()
    }
}

/// Weight operator using checked arithmetic.
///
/// `checked_add` and `checked_subtract` return `None` on overflow, which the
/// flow algorithms report as a contract violation. The unchecked variants
/// saturate at the bounds of `T`.
pub struct CheckedWeights<T>(PhantomData<fn() -> T>);

impl<T> CheckedWeights<T> {
    pub fn new() -> Self {
        CheckedWeights(PhantomData)
    }
}

impl<T> Default for CheckedWeights<T> {
    fn default() -> Self {
        CheckedWeights::new()
    }
}

impl<T> Clone for CheckedWeights<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CheckedWeights<T> {}

impl<T> fmt::Debug for CheckedWeights<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "CheckedWeights<{}>", std::any::type_name::<T>())
    }
}

impl<T> WeightOperator<T> for CheckedWeights<T>
where
    T: CheckedAdd + CheckedSub + Bounded + Zero + Ord,
{
    fn zero(&self) -> T {
        T::zero()
    }

    fn max_value(&self) -> T {
        T::max_value()
    }

    fn add(&self, a: &T, b: &T) -> T {
        a.checked_add(b).unwrap_or_else(T::max_value)
    }

    fn subtract(&self, a: &T, b: &T) -> T {
        a.checked_sub(b).unwrap_or_else(T::min_value)
    }

    fn checked_add(&self, a: &T, b: &T) -> Option<T> {
        CheckedAdd::checked_add(a, b)
    }

    fn checked_subtract(&self, a: &T, b: &T) -> Option<T> {
        CheckedSub::checked_sub(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckedWeights, NumWeights, WeightOperator};

    fn inverse<W, O>(op: O, a: W, b: W)
    where
        W: Clone + PartialEq + std::fmt::Debug,
        O: WeightOperator<W>,
    {
        let sum = op.add(&a, &b);
        assert_eq!(op.subtract(&sum, &b), a);
        assert_eq!(op.add(&a, &op.zero()), a);
    }

    #[test]
    fn test_num_weights() {
        inverse(NumWeights::<i32>::new(), 17, 25);
        inverse(NumWeights::<u64>::new(), 0, 9);
        inverse(NumWeights::<f64>::new(), 0.5, 0.25);
        assert_eq!(NumWeights::<i32>::new().max_value(), i32::MAX);
    }

    #[test]
    fn test_checked_weights() {
        let op = CheckedWeights::<u8>::new();
        inverse(op, 100, 155);
        assert_eq!(op.checked_add(&255, &1), None);
        assert_eq!(op.checked_subtract(&0, &1), None);
        assert_eq!(op.add(&255, &1), 255);
        assert_eq!(op.subtract(&0, &1), 0);
    }

    #[test]
    fn test_by_reference() {
        let op = NumWeights::<i64>::new();
        let r = &op;
        assert_eq!(r.checked_add(&1, &2), Some(3));
        assert_eq!(WeightOperator::<i64>::zero(&r), 0);
    }
}
