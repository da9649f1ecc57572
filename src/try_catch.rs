//! Try/catch as an expression.
//!
//! The `rethrow_*` and [`run_rethrowing`] helpers only erase the error type.
//! The `try_*` helpers recover: they run a fallback or a handler when the
//! primary operation fails.
//!
//! If the fallback or handler fails as well, its error is returned with the
//! primary error attached as a suppressed cause:
//!
//! ```rust
//! use throwing::adapter::Supplier;
//! use throwing::try_catch::try_or_else;
//!
//! let error = try_or_else(
//!     Supplier::new(|| "primary".parse::<i32>()),
//!     Supplier::new(|| std::env::var("THROWING_DOC_UNSET_VARIABLE").map(|_| 0)),
//! )
//! .unwrap_err();
//!
//! assert!(error.is::<std::env::VarError>());
//! assert!(error.suppressed()[0].is::<std::num::ParseIntError>());
//! ```

use crate::adapter::{ThrowingConsumer, ThrowingFunction, ThrowingRunnable, ThrowingSupplier};
use crate::exception::Exception;

/// Returns `secondary` as an [`Exception`] carrying `primary` as a
/// suppressed cause.
fn escalate<E>(primary: Exception, secondary: E) -> Exception
where
    E: Into<Exception>,
{
    secondary.into().with_suppressed(primary)
}

#[cfg(feature = "tracing")]
fn trace_recovery(primary: &Exception) {
    tracing::trace!(error = %primary, "recovering from failed operation");
}

#[cfg(not(feature = "tracing"))]
const fn trace_recovery(_primary: &Exception) {}

/// Runs `supplier`, widening its error into an [`Exception`].
///
/// # Errors
///
/// Returns the supplier's error.
#[inline]
pub fn rethrow_on_exception<T, E, S>(mut supplier: S) -> Result<T, Exception>
where
    S: ThrowingSupplier<T, E>,
    E: Into<Exception>,
{
    supplier.get()
}

/// Runs `supplier`; on failure, shows the error to `on_exception` before
/// returning it.
///
/// # Errors
///
/// Returns the supplier's error. If `on_exception` fails too, returns the
/// observer's error with the supplier's error suppressed.
///
/// # Examples
///
/// ```rust
/// use throwing::Exception;
/// use throwing::adapter::{Consumer, Supplier};
/// use throwing::try_catch::rethrow_on_exception_with;
///
/// let mut seen = Vec::new();
/// let result = rethrow_on_exception_with(
///     Supplier::new(|| "NaN".parse::<u8>()),
///     Consumer::new(|error: &Exception| {
///         seen.push(error.to_string());
///         Ok::<_, std::fmt::Error>(())
///     }),
/// );
///
/// assert!(result.is_err());
/// assert_eq!(seen, ["invalid digit found in string"]);
/// ```
pub fn rethrow_on_exception_with<T, E, S, C, CE>(
    mut supplier: S,
    mut on_exception: C,
) -> Result<T, Exception>
where
    S: ThrowingSupplier<T, E>,
    E: Into<Exception>,
    C: for<'a> ThrowingConsumer<&'a Exception, CE>,
    CE: Into<Exception>,
{
    supplier.get().or_else(|primary| match on_exception.accept_throwing(&primary) {
        Ok(()) => Err(primary),
        Err(secondary) => Err(escalate(primary, secondary)),
    })
}

/// Runs `runnable`, widening its error into an [`Exception`].
///
/// # Errors
///
/// Returns the runnable's error.
#[inline]
pub fn run_rethrowing<E, R>(mut runnable: R) -> Result<(), Exception>
where
    R: ThrowingRunnable<E>,
    E: Into<Exception>,
{
    runnable.run()
}

/// Runs `supplier`; on failure, returns what `fallback` computes from the
/// error instead.
///
/// # Errors
///
/// Returns the fallback's error, with the supplier's error suppressed.
///
/// # Examples
///
/// ```rust
/// use throwing::Exception;
/// use throwing::adapter::{Function, Supplier};
/// use throwing::try_catch::try_catch_fallback;
///
/// let port = try_catch_fallback(
///     Supplier::new(|| "http".parse::<u16>()),
///     Function::new(|error: &Exception| Ok::<_, std::fmt::Error>(if error.is::<std::num::ParseIntError>() { 80 } else { 0 })),
/// );
/// assert_eq!(port.ok(), Some(80));
/// ```
pub fn try_catch_fallback<T, E, S, F, FE>(mut supplier: S, mut fallback: F) -> Result<T, Exception>
where
    S: ThrowingSupplier<T, E>,
    E: Into<Exception>,
    F: for<'a> ThrowingFunction<&'a Exception, T, FE>,
    FE: Into<Exception>,
{
    supplier.get().or_else(|primary| {
        trace_recovery(&primary);
        fallback
            .apply_throwing(&primary)
            .map_err(|secondary| escalate(primary, secondary))
    })
}

/// Runs `supplier`; on failure, returns the value of `fallback` instead.
///
/// # Errors
///
/// Returns the fallback's error, with the supplier's error suppressed.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::Supplier;
/// use throwing::try_catch::try_or_else;
///
/// let value = try_or_else(
///     Supplier::new(|| std::env::var("THROWING_DOC_UNSET_VARIABLE")),
///     Supplier::wrap::<_, std::fmt::Error, _>(|| String::from("expected")),
/// );
/// assert_eq!(value.ok().as_deref(), Some("expected"));
/// ```
pub fn try_or_else<T, E, S, F, FE>(mut supplier: S, mut fallback: F) -> Result<T, Exception>
where
    S: ThrowingSupplier<T, E>,
    E: Into<Exception>,
    F: ThrowingSupplier<T, FE>,
    FE: Into<Exception>,
{
    supplier.get().or_else(|primary| {
        trace_recovery(&primary);
        fallback
            .get_throwing()
            .map_err(|secondary| escalate(primary, secondary))
    })
}

/// Runs `runnable`; on failure, hands the error to `on_exception` and
/// reports success.
///
/// # Errors
///
/// Returns the handler's error, with the runnable's error suppressed.
pub fn try_catch<E, R, C, CE>(mut runnable: R, mut on_exception: C) -> Result<(), Exception>
where
    R: ThrowingRunnable<E>,
    E: Into<Exception>,
    C: for<'a> ThrowingConsumer<&'a Exception, CE>,
    CE: Into<Exception>,
{
    runnable.run().or_else(|primary| {
        trace_recovery(&primary);
        on_exception
            .accept_throwing(&primary)
            .map_err(|secondary| escalate(primary, secondary))
    })
}
