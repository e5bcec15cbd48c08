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

//! # Index-Based List Helpers
//!
//! Index search and element access expressed over a list's valid index
//! range. `indices()` yields a `Range<usize>` spanning `[0, len)`; the
//! search helpers walk that range forward or backward.

use foundation_core::math::range::Range;
use rand::Rng;

/// Index-based queries over a list.
pub trait ListExt<T> {
    /// Returns the range of valid indices, `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::list::ListExt;
    /// # use foundation_core::math::range::Range;
    ///
    /// let waypoints = ["gate", "bridge", "keep"];
    /// assert_eq!(waypoints.indices(), Range::new(0, 3));
    /// assert!(Vec::<u8>::new().indices().is_empty());
    /// ```
    fn indices(&self) -> Range<usize>;

    /// Returns the index of the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::list::ListExt;
    ///
    /// let hp = [30, 0, 12, 0];
    /// assert_eq!(hp.first_index(|&h| h == 0), Some(1));
    /// assert_eq!(hp.first_index(|&h| h > 100), None);
    /// ```
    fn first_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool;

    /// Returns the index of the last element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::list::ListExt;
    ///
    /// let hp = [30, 0, 12, 0];
    /// assert_eq!(hp.last_index(|&h| h == 0), Some(3));
    /// ```
    fn last_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool;

    /// Returns a uniformly chosen element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::list::ListExt;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let drops = ["coin", "gem", "potion"];
    /// let picked = drops.random_element(&mut rng).unwrap();
    /// assert!(drops.contains(picked));
    /// ```
    fn random_element<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng;
}

impl<T> ListExt<T> for [T] {
    #[inline]
    fn indices(&self) -> Range<usize> {
        Range::new(0, self.len())
    }

    fn first_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.indices().iter().find(|&i| predicate(&self[i]))
    }

    fn last_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.indices().iter().rev().find(|&i| predicate(&self[i]))
    }

    fn random_element<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng,
    {
        let indices = self.indices();
        if indices.is_empty() {
            return None;
        }
        self.get(rng.random_range(indices.to_native()))
    }
}
