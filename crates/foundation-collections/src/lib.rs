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

//! # Foundation Collections
//!
//! Functional extensions for slices and lists used by gameplay scripts.
//! All helpers are single linear passes that preserve input order.
//!
//! ## Modules
//!
//! - `slice`: Eager transforms returning owned vectors (`mapped`,
//!   `filtered`, `flat_mapped`, `compact_mapped`, `appending`, `reversed`),
//!   the `any`/`all`/`for_each` visitors, and `compacted` for slices of
//!   options.
//! - `list`: Index-based queries built on `foundation_core`'s `Range`:
//!   `indices`, `first_index`, `last_index` and `random_element`.
//!
//! First and last element access is left to the inherent
//! `<[T]>::first` and `<[T]>::last`, which already return `Option<&T>`.

pub mod list;
pub mod slice;
