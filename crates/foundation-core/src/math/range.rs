// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
};

/// A half-open interval `[lower_bound, upper_bound)` over any totally ordered bound type.
///
/// A `Range` contains every value that is greater than or equal to its lower bound
/// and strictly less than its upper bound. The upper bound itself is never contained.
///
/// # Invariants
///
/// None are enforced. Construction stores both bounds verbatim, so a range with
/// `lower_bound >= upper_bound` is a valid value. Such a range contains no elements,
/// and every predicate on it is answered purely from its bound values.
///
/// # Examples
///
/// ```rust
/// # use foundation_core::math::range::Range;
///
/// let r = Range::new(2, 5);
/// assert!(r.contains(&2));
/// assert!(!r.contains(&5));
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<B> {
    lower_bound: B,
    upper_bound: B,
}

/// An iterator over the integers contained in a `Range`.
///
/// Every call to [`Range::iter`] hands out a fresh cursor, so independent
/// traversals of the same range never observe each other's progress.
///
/// # Examples
///
/// ```rust
/// # use foundation_core::math::range::Range;
///
/// let r = Range::new(1, 4);
/// let mut a = r.iter();
/// let b = r.iter();
///
/// assert_eq!(a.next(), Some(1));
/// assert_eq!(b.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct RangeIter<B>
where
    B: PrimInt,
{
    next: B,
    end: B,
}

impl<B> RangeIter<B>
where
    B: PrimInt,
{
    /// Number of values left, or `None` if it does not fit into `usize`.
    ///
    /// The distance is taken in 128 bits, since `end - next` can exceed
    /// `B::max_value()` for signed bounds.
    #[inline]
    fn remaining(&self) -> Option<usize> {
        if self.next >= self.end {
            return Some(0);
        }
        let distance = if B::min_value() < B::zero() {
            // Two's complement: the wrapped difference is exact for `end > next`.
            (self.end.to_i128()? as u128).wrapping_sub(self.next.to_i128()? as u128)
        } else {
            self.end.to_u128()? - self.next.to_u128()?
        };
        usize::try_from(distance).ok()
    }
}

impl<B> Iterator for RangeIter<B>
where
    B: PrimInt,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.end {
            let result = self.next;
            // `result < end <= B::max_value()`, so the step cannot overflow.
            self.next = result + B::one();
            Some(result)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<B> DoubleEndedIterator for RangeIter<B>
where
    B: PrimInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next < self.end {
            self.end = self.end - B::one();
            Some(self.end)
        } else {
            None
        }
    }
}

/// # Panics
///
/// `len` panics if the number of remaining values exceeds `usize::MAX`, which
/// is only possible for 64- and 128-bit bounds spanning most of their domain.
/// In that case `size_hint` is inexact and reports `(usize::MAX, None)`.
impl<B> ExactSizeIterator for RangeIter<B> where B: PrimInt {}

impl<B> FusedIterator for RangeIter<B> where B: PrimInt {}

impl<B> Range<B> {
    /// Creates a new `Range` from its bounds.
    ///
    /// The bounds are stored as given. No ordering check is performed, so
    /// `Range::new(5, 2)` is a valid, empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// let r = Range::new(0, 10);
    /// assert_eq!(*r.lower_bound(), 0);
    /// assert_eq!(*r.upper_bound(), 10);
    ///
    /// let inverted = Range::new(5, 2);
    /// assert!(inverted.is_empty());
    /// ```
    #[inline]
    pub const fn new(lower_bound: B, upper_bound: B) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// Creates a `Range` from a native `std::ops::Range`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// assert_eq!(Range::from_native(3..7), Range::new(3, 7));
    /// ```
    #[inline]
    pub fn from_native(range: std::ops::Range<B>) -> Self {
        Self::new(range.start, range.end)
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn lower_bound(&self) -> &B {
        &self.lower_bound
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub const fn upper_bound(&self) -> &B {
        &self.upper_bound
    }

    /// Consumes the range and returns `(lower_bound, upper_bound)`.
    #[inline]
    pub fn into_bounds(self) -> (B, B) {
        (self.lower_bound, self.upper_bound)
    }
}

impl<B> Range<B>
where
    B: Clone,
{
    /// Converts the range into an equivalent native `std::ops::Range`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// let items = ['a', 'b', 'c', 'd'];
    /// let r = Range::new(1, 3);
    /// assert_eq!(&items[r.to_native()], &['b', 'c']);
    /// ```
    #[inline]
    pub fn to_native(&self) -> std::ops::Range<B> {
        self.lower_bound.clone()..self.upper_bound.clone()
    }
}

impl<B> Range<B>
where
    B: Ord,
{
    /// Returns `true` if `element` lies in `[lower_bound, upper_bound)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// let r = Range::new(0, 10);
    /// assert!(r.contains(&0));
    /// assert!(r.contains(&9));
    /// assert!(!r.contains(&10));
    /// assert!(!Range::new(0, 0).contains(&0));
    /// ```
    #[inline]
    pub fn contains(&self, element: &B) -> bool {
        *element >= self.lower_bound && *element < self.upper_bound
    }

    /// Returns `true` if the bounds of `other` lie within the bounds of `self`.
    ///
    /// This compares bounds only: `other.lower_bound >= self.lower_bound` and
    /// `other.upper_bound <= self.upper_bound`. An empty or inverted `other`
    /// is judged by its bound values like any other range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// let r = Range::new(2, 5);
    /// assert!(r.contains_range(&Range::new(3, 4)));
    /// assert!(r.contains_range(&r));
    /// assert!(!r.contains_range(&Range::new(1, 6)));
    /// ```
    #[inline]
    pub fn contains_range(&self, other: &Self) -> bool {
        other.lower_bound >= self.lower_bound && other.upper_bound <= self.upper_bound
    }

    /// Returns `true` if either range holds one of the other's bounds.
    ///
    /// Lower bounds are tested with [`Range::contains`]. An exclusive upper bound
    /// is held by a range when it lies in `(lower_bound, upper_bound]`, so ranges
    /// that only touch at a shared boundary do not overlap. For non-empty ranges
    /// this is exactly "shares at least one element"; empty and inverted ranges
    /// are answered from their bound values alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// let a = Range::new(0, 5);
    /// assert!(a.overlaps(&Range::new(4, 10)));
    /// assert!(!a.overlaps(&Range::new(5, 10))); // touching
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        let lower = self.contains(&other.lower_bound) || other.contains(&self.lower_bound);
        let upper =
            self.holds_upper(&other.upper_bound) || other.holds_upper(&self.upper_bound);
        lower || upper
    }

    #[inline]
    fn holds_upper(&self, upper: &B) -> bool {
        *upper > self.lower_bound && *upper <= self.upper_bound
    }

    /// Returns `true` if the range contains no elements (`lower_bound >= upper_bound`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// assert!(Range::new(3, 3).is_empty());
    /// assert!(Range::new(4, 3).is_empty());
    /// assert!(!Range::new(3, 4).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower_bound >= self.upper_bound
    }
}

impl<B> Range<B>
where
    B: Ord + Clone,
{
    /// Returns a copy of this range clamped to `limits`.
    ///
    /// The lower bound becomes `max(self.lower_bound, limits.lower_bound)` and the
    /// upper bound `min(self.upper_bound, limits.upper_bound)`. The result is not
    /// re-validated: clamping against disjoint limits yields an inverted range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// let r = Range::new(0, 10);
    /// assert_eq!(r.clamped_to(&Range::new(3, 7)), Range::new(3, 7));
    /// assert_eq!(r.clamped_to(&Range::new(20, 30)), Range::new(20, 10));
    /// ```
    #[inline]
    pub fn clamped_to(&self, limits: &Self) -> Self {
        Self::new(
            max(&self.lower_bound, &limits.lower_bound).clone(),
            min(&self.upper_bound, &limits.upper_bound).clone(),
        )
    }
}

impl<B> Range<B>
where
    B: PrimInt,
{
    /// Creates a new iterator over the integers in the range, in ascending order.
    ///
    /// Each call returns an independent cursor positioned at `lower_bound`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_core::math::range::Range;
    ///
    /// assert_eq!(Range::new(2, 5).iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    /// assert_eq!(Range::new(5, 5).iter().count(), 0);
    /// assert_eq!(Range::new(5, 2).iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> RangeIter<B> {
        RangeIter {
            next: self.lower_bound,
            end: self.upper_bound,
        }
    }
}

impl<B> std::fmt::Display for Range<B>
where
    B: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.lower_bound, self.upper_bound)
    }
}

impl<B> RangeBounds<B> for Range<B> {
    fn start_bound(&self) -> Bound<&B> {
        Bound::Included(&self.lower_bound)
    }

    fn end_bound(&self) -> Bound<&B> {
        Bound::Excluded(&self.upper_bound)
    }
}

impl<B> IntoIterator for Range<B>
where
    B: PrimInt,
{
    type Item = B;
    type IntoIter = RangeIter<B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B> IntoIterator for &Range<B>
where
    B: PrimInt,
{
    type Item = B;
    type IntoIter = RangeIter<B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B> From<std::ops::Range<B>> for Range<B> {
    #[inline]
    fn from(range: std::ops::Range<B>) -> Self {
        Self::from_native(range)
    }
}

impl<B> From<Range<B>> for std::ops::Range<B> {
    #[inline]
    fn from(range: Range<B>) -> Self {
        let (start, end) = range.into_bounds();
        start..end
    }
}
