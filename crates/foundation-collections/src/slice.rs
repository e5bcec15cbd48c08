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

//! # Functional Slice Extensions
//!
//! Eager, order-preserving transforms over slices that return owned vectors.
//! The traits are implemented for `[T]`, so they apply to arrays by reference,
//! slices and `Vec<T>` alike.
//!
//! Method names are chosen so they never collide with inherent methods
//! (`Vec::append`, `<[T]>::reverse`, `<[T; N]>::map`), which would otherwise
//! take precedence during method resolution.
//!
//! ## Usage
//!
//! ```rust
//! use foundation_collections::slice::{CompactExt, SliceExt};
//!
//! let scores = vec![12, 7, 30, 4];
//!
//! assert_eq!(scores.mapped(|s| s * 2), vec![24, 14, 60, 8]);
//! assert_eq!(scores.filtered(|&s| s >= 10), vec![12, 30]);
//! assert_eq!(scores.reversed(), vec![4, 30, 7, 12]);
//! assert!(scores.any(|&s| s > 25));
//!
//! let loot = [Some("sword"), None, Some("shield")];
//! assert_eq!(loot.compacted(), vec!["sword", "shield"]);
//! ```

/// Functional transforms over a slice.
pub trait SliceExt<T> {
    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops at the first match. An empty slice yields `false`.
    fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first mismatch. An empty slice yields `true`.
    fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Returns the results of applying `transform` to every element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::slice::SliceExt;
    ///
    /// let names = ["ada", "grace"];
    /// assert_eq!(names.mapped(|n| n.len()), vec![3, 5]);
    /// ```
    fn mapped<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(&T) -> R;

    /// Returns the concatenated results of applying `transform` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::slice::SliceExt;
    ///
    /// let counts = [1, 0, 2];
    /// assert_eq!(counts.flat_mapped(|&n| vec![n; n]), vec![1, 2, 2]);
    /// ```
    fn flat_mapped<R, I, F>(&self, transform: F) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&T) -> I;

    /// Returns the `Some` results of applying `transform` to every element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::slice::SliceExt;
    ///
    /// let raw = ["3", "x", "5"];
    /// assert_eq!(raw.compact_mapped(|s| s.parse::<i32>().ok()), vec![3, 5]);
    /// ```
    fn compact_mapped<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(&T) -> Option<R>;

    /// Returns the elements that satisfy `predicate`, in order.
    fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// Returns a new vector holding the elements of `self` followed by those of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use foundation_collections::slice::SliceExt;
    ///
    /// assert_eq!([1, 2].appending(&[3]), vec![1, 2, 3]);
    /// ```
    fn appending(&self, other: &[T]) -> Vec<T>
    where
        T: Clone;

    /// Calls `body` on each element in order.
    ///
    /// Unlike a `for` loop, `body` cannot break out early; returning from it
    /// only ends the current call.
    fn for_each<F>(&self, body: F)
    where
        F: FnMut(&T);

    /// Returns a new vector with the elements in reverse order.
    ///
    /// The slice itself is left untouched; use `<[T]>::reverse` to reverse in place.
    fn reversed(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    #[inline]
    fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    #[inline]
    fn mapped<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        self.iter().map(transform).collect()
    }

    fn flat_mapped<R, I, F>(&self, mut transform: F) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&T) -> I,
    {
        let mut result = Vec::with_capacity(self.len());
        for element in self {
            result.extend(transform(element));
        }
        result
    }

    #[inline]
    fn compact_mapped<R, F>(&self, transform: F) -> Vec<R>
    where
        F: FnMut(&T) -> Option<R>,
    {
        self.iter().filter_map(transform).collect()
    }

    fn filtered<F>(&self, mut predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|e| predicate(e)).cloned().collect()
    }

    fn appending(&self, other: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = Vec::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }

    #[inline]
    fn for_each<F>(&self, body: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(body);
    }

    #[inline]
    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }
}

/// Removal of absent values from a slice of options.
pub trait CompactExt<T> {
    /// Returns the present values, in order.
    fn compacted(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> CompactExt<T> for [Option<T>] {
    #[inline]
    fn compacted(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().flatten().cloned().collect()
    }
}
