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

//! # Guard Clauses
//!
//! Precondition checks that report violations as a distinguished
//! `GuardClauseError` instead of panicking. A failed guard clause signals a
//! programmer error; callers usually propagate it with `?` up to a boundary
//! that can report it.
//!
//! Every failure is logged at `debug` level through the `log` facade when the
//! error value is created.
//!
//! ## Usage
//!
//! ```rust
//! use foundation_core::guard;
//! use foundation_core::utils::guard::{GuardClauseError, not_none, require};
//!
//! fn spawn_wave(size: usize, prefab: Option<&str>) -> Result<String, GuardClauseError> {
//!     require(size > 0, "a wave needs at least one enemy")?;
//!     let prefab = not_none(prefab, "prefab")?;
//!     guard!(size <= 64, "wave of {size} exceeds the spawn budget");
//!     Ok(format!("{size} x {prefab}"))
//! }
//!
//! assert_eq!(spawn_wave(3, Some("goblin")).unwrap(), "3 x goblin");
//! assert!(spawn_wave(0, Some("goblin")).is_err());
//! assert!(spawn_wave(3, None).is_err());
//! assert!(spawn_wave(65, Some("goblin")).is_err());
//! ```

/// The error returned when a guard clause fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardClauseError {
    /// A value that must be present was `None`.
    MissingValue {
        /// The name of the missing value.
        name: &'static str,
    },
    /// A required condition did not hold.
    Requirement(String),
    /// The code path has not been implemented.
    NotImplemented,
}

impl GuardClauseError {
    /// Creates a `Requirement` error with the given message.
    ///
    /// This is the constructor used by [`require`] and the [`guard!`](crate::guard)
    /// macro, and it logs the failure.
    pub fn requirement(message: impl Into<String>) -> Self {
        raise(Self::Requirement(message.into()))
    }
}

impl std::fmt::Display for GuardClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue { name } => {
                write!(f, "Was expecting a value for `{name}`, found none")
            }
            Self::Requirement(message) => write!(f, "Requirement failed: {message}"),
            Self::NotImplemented => write!(f, "Not implemented"),
        }
    }
}

impl std::error::Error for GuardClauseError {}

#[inline(never)]
#[cold]
fn raise(error: GuardClauseError) -> GuardClauseError {
    log::debug!("guard clause failed: {error}");
    error
}

/// Returns the contained value, or a `MissingValue` error naming `name`.
///
/// # Errors
///
/// Returns `GuardClauseError::MissingValue` if `value` is `None`.
///
/// # Examples
///
/// ```rust
/// # use foundation_core::utils::guard::{GuardClauseError, not_none};
///
/// assert_eq!(not_none(Some(3), "count"), Ok(3));
/// assert_eq!(
///     not_none::<i32>(None, "count"),
///     Err(GuardClauseError::MissingValue { name: "count" })
/// );
/// ```
#[inline]
pub fn not_none<T>(value: Option<T>, name: &'static str) -> Result<T, GuardClauseError> {
    match value {
        Some(value) => Ok(value),
        None => Err(raise(GuardClauseError::MissingValue { name })),
    }
}

/// Fails with `message` unless `condition` holds.
///
/// # Errors
///
/// Returns `GuardClauseError::Requirement` if `condition` is `false`.
///
/// # Examples
///
/// ```rust
/// # use foundation_core::utils::guard::{GuardClauseError, require};
///
/// assert!(require(1 < 2, "ordering").is_ok());
/// assert_eq!(
///     require(2 < 1, "ordering"),
///     Err(GuardClauseError::Requirement("ordering".to_string()))
/// );
/// ```
#[inline]
pub fn require(condition: bool, message: &str) -> Result<(), GuardClauseError> {
    if condition {
        return Ok(());
    }
    Err(GuardClauseError::requirement(message))
}

/// Like [`require`], but evaluates the condition lazily.
///
/// # Errors
///
/// Returns `GuardClauseError::Requirement` if `predicate` returns `false`.
#[inline]
pub fn require_with<F>(predicate: F, message: &str) -> Result<(), GuardClauseError>
where
    F: FnOnce() -> bool,
{
    require(predicate(), message)
}

/// Marks a code path that has not been implemented yet.
///
/// # Errors
///
/// Always returns `GuardClauseError::NotImplemented`.
#[inline]
pub fn not_implemented<T>() -> Result<T, GuardClauseError> {
    Err(raise(GuardClauseError::NotImplemented))
}

/// Returns early with a `GuardClauseError::Requirement` unless the condition holds.
///
/// The error is converted with `Into`, so the macro works in any function whose
/// error type implements `From<GuardClauseError>`. Without a message, the
/// stringified condition is used.
///
/// # Examples
///
/// ```rust
/// use foundation_core::guard;
/// use foundation_core::utils::guard::GuardClauseError;
///
/// fn halve(n: u32) -> Result<u32, GuardClauseError> {
///     guard!(n % 2 == 0, "{n} is odd");
///     Ok(n / 2)
/// }
///
/// assert_eq!(halve(8), Ok(4));
/// assert_eq!(halve(7), Err(GuardClauseError::Requirement("7 is odd".to_string())));
/// ```
#[macro_export]
macro_rules! guard {
    ($cond:expr $(,)?) => {
        $crate::guard!($cond, "{}", ::core::stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(
                $crate::utils::guard::GuardClauseError::requirement(::std::format!($($arg)+))
                    .into(),
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum SpawnError {
        Guard(GuardClauseError),
    }

    impl From<GuardClauseError> for SpawnError {
        fn from(e: GuardClauseError) -> Self {
            Self::Guard(e)
        }
    }

    fn checked_div(a: i32, b: i32) -> Result<i32, GuardClauseError> {
        crate::guard!(b != 0, "divisor must be non-zero, got {}", b);
        Ok(a / b)
    }

    fn spawn(count: usize) -> Result<usize, SpawnError> {
        crate::guard!(count > 0);
        Ok(count)
    }

    #[test]
    fn test_not_none() {
        assert_eq!(not_none(Some("player"), "target"), Ok("player"));
        assert_eq!(
            not_none::<&str>(None, "target"),
            Err(GuardClauseError::MissingValue { name: "target" })
        );
    }

    #[test]
    fn test_require() {
        assert_eq!(require(true, "unused"), Ok(()));
        assert_eq!(
            require(false, "health must be positive"),
            Err(GuardClauseError::Requirement(
                "health must be positive".to_string()
            ))
        );
    }

    #[test]
    fn test_require_with_is_lazy() {
        let mut calls = 0;
        let result = require_with(
            || {
                calls += 1;
                false
            },
            "predicate failed",
        );
        assert_eq!(calls, 1);
        assert!(matches!(result, Err(GuardClauseError::Requirement(_))));

        assert!(require_with(|| true, "unused").is_ok());
    }

    #[test]
    fn test_not_implemented() {
        assert_eq!(
            not_implemented::<u8>(),
            Err(GuardClauseError::NotImplemented)
        );
    }

    #[test]
    fn test_guard_macro_returns_early() {
        assert_eq!(checked_div(9, 3), Ok(3));
        assert_eq!(
            checked_div(9, 0),
            Err(GuardClauseError::Requirement(
                "divisor must be non-zero, got 0".to_string()
            ))
        );
    }

    #[test]
    fn test_guard_macro_without_message_converts_error() {
        assert_eq!(spawn(2), Ok(2));
        assert_eq!(
            spawn(0),
            Err(SpawnError::Guard(GuardClauseError::Requirement(
                "count > 0".to_string()
            )))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GuardClauseError::MissingValue { name: "prefab" }.to_string(),
            "Was expecting a value for `prefab`, found none"
        );
        assert_eq!(
            GuardClauseError::Requirement("x".to_string()).to_string(),
            "Requirement failed: x"
        );
        assert_eq!(GuardClauseError::NotImplemented.to_string(), "Not implemented");
    }

    mod capture {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::sync::{Mutex, Once};

        struct CaptureLogger {
            records: Mutex<Vec<(Level, String)>>,
        }

        impl Log for CaptureLogger {
            fn enabled(&self, metadata: &Metadata<'_>) -> bool {
                metadata.level() <= Level::Debug
            }

            fn log(&self, record: &Record<'_>) {
                if self.enabled(record.metadata()) {
                    if let Ok(mut records) = self.records.lock() {
                        records.push((record.level(), record.args().to_string()));
                    }
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: CaptureLogger = CaptureLogger {
            records: Mutex::new(Vec::new()),
        };
        static INIT: Once = Once::new();

        /// Installs the capturing logger for this test binary.
        pub fn install() {
            INIT.call_once(|| {
                log::set_logger(&LOGGER).expect("no other logger is installed in unit tests");
                log::set_max_level(LevelFilter::Debug);
            });
        }

        /// Returns every captured `debug` message containing `needle`.
        pub fn debug_messages_containing(needle: &str) -> Vec<String> {
            let records = LOGGER.records.lock().expect("logger mutex poisoned");
            records
                .iter()
                .filter(|(level, message)| *level == Level::Debug && message.contains(needle))
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    #[test]
    fn test_failures_are_logged_at_debug() {
        capture::install();

        let _ = require(false, "mana pool exhausted 7f3a");
        let _ = not_none::<u8>(None, "spawn_point_7f3a");
        assert!(require(true, "never logged 7f3a").is_ok());

        assert_eq!(
            capture::debug_messages_containing("mana pool exhausted 7f3a"),
            vec!["guard clause failed: Requirement failed: mana pool exhausted 7f3a"]
        );
        assert_eq!(
            capture::debug_messages_containing("spawn_point_7f3a"),
            vec!["guard clause failed: Was expecting a value for `spawn_point_7f3a`, found none"]
        );
        assert!(capture::debug_messages_containing("never logged 7f3a").is_empty());
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<GuardClauseError>();
    }
}
