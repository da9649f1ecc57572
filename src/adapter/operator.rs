//! Operators: functions whose inputs and output share one type.

use std::cmp::Ordering;

use super::bi_function::{BiFunction, ThrowingBiFunction};
use super::function::{Function, ThrowingFunction};

/// A [`ThrowingFunction`] from `T` to `T`.
///
/// Implemented for every such function; use it as a bound.
pub trait ThrowingUnaryOperator<T, E>: ThrowingFunction<T, T, E> {}

impl<T, E, A> ThrowingUnaryOperator<T, E> for A where A: ThrowingFunction<T, T, E> + ?Sized {}

/// A [`ThrowingBiFunction`] from two `T`s to a `T`.
///
/// Implemented for every such function; use it as a bound.
pub trait ThrowingBinaryOperator<T, E>: ThrowingBiFunction<T, T, T, E> {}

impl<T, E, A> ThrowingBinaryOperator<T, E> for A where A: ThrowingBiFunction<T, T, T, E> + ?Sized {}

/// Returns an operator that yields its input unchanged and never fails.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{ThrowingFunction, identity};
///
/// let mut same = identity::<_, std::fmt::Error>();
/// assert_eq!(same.apply_throwing("unchanged"), Ok("unchanged"));
/// ```
pub fn identity<T, E>() -> Function<impl FnMut(T) -> Result<T, E> + Copy> {
    Function::new(|input: T| Ok::<T, E>(input))
}

/// Returns an operator yielding the lesser of its operands under
/// `comparator`. When they compare equal the first operand is returned.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{ThrowingBiFunction, min_by};
///
/// let mut shortest = min_by::<&str, std::fmt::Error, _>(|left, right| left.len().cmp(&right.len()));
/// assert_eq!(shortest.apply_throwing("abc", "de"), Ok("de"));
/// assert_eq!(shortest.apply_throwing("ab", "cd"), Ok("ab"));
/// ```
pub fn min_by<T, E, C>(mut comparator: C) -> BiFunction<impl FnMut(T, T) -> Result<T, E>>
where
    C: FnMut(&T, &T) -> Ordering,
{
    BiFunction::new(move |first: T, second: T| {
        if comparator(&first, &second).is_le() {
            Ok::<T, E>(first)
        } else {
            Ok(second)
        }
    })
}

/// Returns an operator yielding the greater of its operands under
/// `comparator`. When they compare equal the first operand is returned.
pub fn max_by<T, E, C>(mut comparator: C) -> BiFunction<impl FnMut(T, T) -> Result<T, E>>
where
    C: FnMut(&T, &T) -> Ordering,
{
    BiFunction::new(move |first: T, second: T| {
        if comparator(&first, &second).is_ge() {
            Ok::<T, E>(first)
        } else {
            Ok(second)
        }
    })
}
