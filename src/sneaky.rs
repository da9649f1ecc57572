//! The rethrow primitive.
//!
//! An adapter's declared-throwing entry point fails with a concrete error
//! type. Before the failure leaves the adapter it is handed to
//! [`sneaky_throw`], which widens it into an [`Exception`] so that the caller
//! does not have to name the concrete type. The widening is lossless: the
//! original error is boxed as is and can be recovered by downcasting.
//!
//! Some call sites cannot carry a `Result` at all (`Iterator::map`, a
//! callback registered with a third-party API). For those, the `unchecked`
//! feature provides [`throw_unchecked`], which raises the exception by
//! unwinding, and [`catch_unchecked`], which turns such an unwind back into
//! an `Err`. This is an escape hatch: it only works with `panic = "unwind"`,
//! and an unchecked throw that is never caught ends the thread like any
//! other panic.
//!
//! # Examples
//!
//! ```rust
//! use throwing::Exception;
//! use throwing::sneaky::sneaky_throw;
//!
//! fn parse(input: &str) -> Result<i32, Exception> {
//!     match input.parse::<i32>() {
//!         Ok(value) => Ok(value),
//!         Err(error) => sneaky_throw(error),
//!     }
//! }
//!
//! assert_eq!(parse("42").ok(), Some(42));
//! assert!(parse("forty-two").unwrap_err().is::<std::num::ParseIntError>());
//! ```

use crate::exception::Exception;

/// Raises `error` with its static type erased.
///
/// Never returns a success. The free `T` lets it close a branch of any
/// function returning `Result<T, Exception>`.
#[inline]
pub fn sneaky_throw<T, E>(error: E) -> Result<T, Exception>
where
    E: Into<Exception>,
{
    Err(error.into())
}

/// Erases the error type of a result.
///
/// # Errors
///
/// Returns the error of `result`, widened into an [`Exception`].
#[inline]
pub fn rethrow<T, E>(result: Result<T, E>) -> Result<T, Exception>
where
    E: Into<Exception>,
{
    result.or_else(sneaky_throw)
}

#[cfg(feature = "unchecked")]
struct UncheckedThrow(Exception);

/// Raises `error` by unwinding, bypassing the signature of the current
/// function.
///
/// The unwind carries the error as an [`Exception`]; [`catch_unchecked`]
/// recovers it. No panic hook runs, so nothing is printed.
///
/// # Examples
///
/// ```rust
/// use throwing::sneaky::{catch_unchecked, throw_unchecked};
///
/// let result = catch_unchecked(|| -> i32 { throw_unchecked(std::fmt::Error) });
/// assert!(result.unwrap_err().is::<std::fmt::Error>());
/// ```
#[cfg(feature = "unchecked")]
pub fn throw_unchecked<E>(error: E) -> !
where
    E: Into<Exception>,
{
    std::panic::resume_unwind(Box::new(UncheckedThrow(error.into())))
}

/// Returns the success value of `result`, or raises its error with
/// [`throw_unchecked`].
#[cfg(feature = "unchecked")]
#[inline]
pub fn sneaky_unwrap<T, E>(result: Result<T, E>) -> T
where
    E: Into<Exception>,
{
    match result {
        Ok(value) => value,
        Err(error) => throw_unchecked(error),
    }
}

/// Runs `operation`, converting an unchecked throw back into an `Err`.
///
/// Panics that did not come from [`throw_unchecked`] are resumed unchanged.
/// The operation is treated as unwind safe: a caught exception is an
/// ordinary failure here, not a broken invariant.
///
/// # Errors
///
/// Returns the [`Exception`] raised by `operation` through
/// [`throw_unchecked`].
///
/// # Examples
///
/// ```rust
/// use throwing::sneaky::{catch_unchecked, sneaky_unwrap};
///
/// let parsed = catch_unchecked(|| {
///     ["1", "2", "x"]
///         .iter()
///         .map(|text| sneaky_unwrap(text.parse::<i32>()))
///         .sum::<i32>()
/// });
/// assert!(parsed.unwrap_err().is::<std::num::ParseIntError>());
/// ```
#[cfg(feature = "unchecked")]
pub fn catch_unchecked<R, F>(operation: F) -> Result<R, Exception>
where
    F: FnOnce() -> R,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(operation)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<UncheckedThrow>() {
            Ok(thrown) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %thrown.0, "caught unchecked exception");
                Err(thrown.0)
            }
            Err(payload) => std::panic::resume_unwind(payload),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fmt;

    #[derive(Debug, PartialEq, Eq)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    #[rstest]
    fn test_sneaky_throw_preserves_error() {
        let result: Result<String, Exception> = sneaky_throw(Refused);
        assert_eq!(result.unwrap_err().downcast_ref::<Refused>(), Some(&Refused));
    }

    #[rstest]
    fn test_rethrow_passes_success_through() {
        let result: Result<i32, Refused> = Ok(3);
        assert_eq!(rethrow(result).ok(), Some(3));
    }

    #[rstest]
    fn test_rethrow_widens_failure() {
        let result: Result<i32, Refused> = Err(Refused);
        assert!(rethrow(result).unwrap_err().is::<Refused>());
    }

    #[cfg(feature = "unchecked")]
    #[rstest]
    fn test_catch_unchecked_returns_value() {
        assert_eq!(catch_unchecked(|| 7).ok(), Some(7));
    }

    #[cfg(feature = "unchecked")]
    #[rstest]
    fn test_throw_unchecked_is_caught() {
        let result = catch_unchecked(|| -> i32 { throw_unchecked(Refused) });
        assert_eq!(result.unwrap_err().downcast_ref::<Refused>(), Some(&Refused));
    }

    #[cfg(feature = "unchecked")]
    #[rstest]
    fn test_foreign_panic_is_resumed() {
        let outer = std::panic::catch_unwind(|| {
            let _ = catch_unchecked(|| -> i32 {
                std::panic::resume_unwind(Box::new("not an exception"))
            });
        });
        let payload = outer.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"not an exception"));
    }

    #[cfg(feature = "unchecked")]
    #[rstest]
    fn test_sneaky_unwrap_inside_iterator() {
        let total = catch_unchecked(|| {
            [Ok(1), Ok(2), Err(Refused)]
                .into_iter()
                .map(sneaky_unwrap)
                .sum::<i32>()
        });
        assert!(total.unwrap_err().is::<Refused>());
    }
}
