//! Fluent mutation and value transforms.
//!
//! [`with`] runs a mutation on a value and hands the value back, so that
//! construct, configure and return fit in one expression:
//!
//! ```rust
//! use throwing::adapter::Consumer;
//! use throwing::value::with;
//! use std::collections::BTreeSet;
//!
//! let primes = with(BTreeSet::new(), Consumer::new(|set: &mut BTreeSet<u32>| {
//!     set.extend([2, 3, 5, 7]);
//!     Ok::<_, std::fmt::Error>(())
//! }))?;
//! assert_eq!(primes.len(), 4);
//! # Ok::<(), std::fmt::Error>(())
//! ```

use crate::adapter::{
    Function, ThrowingConsumer, ThrowingFunction, ThrowingPredicate, ThrowingSupplier,
};
use crate::exception::{Exception, require};
use crate::sneaky::rethrow;

/// Runs `consumer` on `value` and returns the value.
///
/// # Errors
///
/// Returns the consumer's error; the value is dropped in that case.
pub fn with<T, E, C>(mut value: T, mut consumer: C) -> Result<T, E>
where
    C: for<'a> ThrowingConsumer<&'a mut T, E>,
{
    consumer.accept_throwing(&mut value)?;
    Ok(value)
}

/// Like [`with`], for a consumer that may be absent.
///
/// # Errors
///
/// Returns [`UsageError::MissingArgument`](crate::UsageError::MissingArgument)
/// if `consumer` is `None`, before `value` is touched. Otherwise returns the
/// consumer's error.
///
/// # Examples
///
/// ```rust
/// use throwing::{Exception, UsageError};
/// use throwing::adapter::Consumer;
/// use throwing::value::with_optional;
///
/// let mut configure = Some(Consumer::new(|text: &mut String| {
///     text.push('!');
///     Ok::<_, std::fmt::Error>(())
/// }));
/// assert_eq!(with_optional(String::from("hi"), configure.take()).ok().as_deref(), Some("hi!"));
///
/// let error = with_optional(String::new(), configure).unwrap_err();
/// assert!(error.is::<UsageError>());
/// ```
pub fn with_optional<T, E, C>(value: T, consumer: Option<C>) -> Result<T, Exception>
where
    C: for<'a> ThrowingConsumer<&'a mut T, E>,
    E: Into<Exception>,
{
    let consumer = require(consumer, "consumer")?;
    rethrow(with(value, consumer))
}

/// Lifts a mutation into a unary operator that returns its mutated input.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{Consumer, ThrowingFunction};
/// use throwing::value::apply;
///
/// let mut shout = apply(Consumer::new(|text: &mut String| {
///     text.make_ascii_uppercase();
///     Ok::<_, std::fmt::Error>(())
/// }));
/// assert_eq!(shout.apply_throwing(String::from("quiet")), Ok(String::from("QUIET")));
/// ```
pub fn apply<T, E, C>(mut consumer: C) -> Function<impl FnMut(T) -> Result<T, E>>
where
    C: for<'a> ThrowingConsumer<&'a mut T, E>,
{
    Function::new(move |value: T| with(value, &mut consumer))
}

/// Applies `function` to `value`.
///
/// # Errors
///
/// Returns the function's error.
#[inline]
pub fn map<T, R, E, F>(value: T, mut function: F) -> Result<R, E>
where
    F: ThrowingFunction<T, R, E>,
{
    function.apply_throwing(value)
}

/// Produces a value, runs `job` on it when `condition` holds, and returns it.
///
/// # Errors
///
/// Returns the first error among the supplier, the condition and the job.
/// Later steps are not run.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{Consumer, Predicate, Supplier};
/// use throwing::value::do_if;
///
/// let trimmed = do_if(
///     Supplier::new(|| Ok::<_, std::fmt::Error>(String::from("padded  "))),
///     Predicate::new(|text: &String| Ok(text.ends_with(' '))),
///     Consumer::new(|text: &mut String| {
///         text.truncate(text.trim_end().len());
///         Ok(())
///     }),
/// );
/// assert_eq!(trimmed.ok().as_deref(), Some("padded"));
/// ```
pub fn do_if<T, E, S, P, C>(mut supplier: S, mut condition: P, mut job: C) -> Result<T, E>
where
    S: ThrowingSupplier<T, E>,
    P: ThrowingPredicate<T, E>,
    C: for<'a> ThrowingConsumer<&'a mut T, E>,
{
    let mut operand = supplier.get_throwing()?;
    if condition.test_throwing(&operand)? {
        job.accept_throwing(&mut operand)?;
    }
    Ok(operand)
}
