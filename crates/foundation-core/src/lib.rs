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

//! # Foundation Core
//!
//! Value types and precondition helpers shared by the Foundation scripting
//! utilities. Everything here is synchronous, allocation-free on the happy
//! path, and safe to share across threads whenever the bound types are.
//!
//! ## Modules
//!
//! - `math`: The half-open `Range<Bound>` value type with containment,
//!   overlap and clamping predicates, integer iteration (`Iterator`,
//!   `DoubleEndedIterator`, `ExactSizeIterator`, `FusedIterator`) and
//!   conversions to/from `std::ops::Range`.
//! - `utils`: Guard clauses (`require`, `not_none`, `guard!`) that report
//!   violated preconditions as a `GuardClauseError`.
//!
//! ## Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for `Range`.

pub mod math;
pub mod utils;
