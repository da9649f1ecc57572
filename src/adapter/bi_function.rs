//! Two-argument transforms.

use std::marker::PhantomData;

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

use super::function::ThrowingFunction;

/// A transform from a `T` and a `U` to an `R` that may fail with `E`.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{BiFunction, ThrowingBiFunction};
///
/// #[derive(Debug)]
/// struct DivisionByZero;
///
/// impl std::fmt::Display for DivisionByZero {
///     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         formatter.write_str("division by zero")
///     }
/// }
///
/// impl std::error::Error for DivisionByZero {}
///
/// let mut divide = BiFunction::new(|numerator: i32, denominator: i32| {
///     numerator.checked_div(denominator).ok_or(DivisionByZero)
/// });
///
/// assert_eq!(divide.apply(10, 2).ok(), Some(5));
/// assert!(divide.apply(1, 0).unwrap_err().is::<DivisionByZero>());
/// ```
pub trait ThrowingBiFunction<T, U, R, E> {
    /// Applies this function to the given arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped computation fails with.
    fn apply_throwing(&mut self, first: T, second: U) -> Result<R, E>;

    /// Applies this function, failing with an [`Exception`].
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped computation as an [`Exception`].
    fn apply(&mut self, first: T, second: U) -> Result<R, Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.apply_throwing(first, second))
    }

    /// Returns a function that applies `self`, then `after` to the result.
    ///
    /// `after` is not invoked if `self` fails.
    fn and_then<V, G>(self, after: G) -> BiFunctionAndThen<Self, G, R>
    where
        Self: Sized,
        G: ThrowingFunction<R, V, E>,
    {
        BiFunctionAndThen {
            first: self,
            second: after,
            _middle: PhantomData,
        }
    }

    /// Returns the ordinary-callback view of this function.
    fn unthrow(mut self) -> impl FnMut(T, U) -> Result<R, Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |first, second| self.apply(first, second)
    }

    /// Returns a plain `FnMut(T, U) -> R` that raises failures by unwinding.
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut(T, U) -> R
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |first, second| sneaky_unwrap(self.apply_throwing(first, second))
    }
}

impl<T, U, R, E, A> ThrowingBiFunction<T, U, R, E> for &mut A
where
    A: ThrowingBiFunction<T, U, R, E> + ?Sized,
{
    fn apply_throwing(&mut self, first: T, second: U) -> Result<R, E> {
        (**self).apply_throwing(first, second)
    }
}

/// A [`ThrowingBiFunction`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct BiFunction<F> {
    function: F,
}

impl<F> BiFunction<F> {
    /// Creates a function from a closure returning `Result`.
    #[inline]
    pub const fn new<T, U, R, E>(function: F) -> Self
    where
        F: FnMut(T, U) -> Result<R, E>,
    {
        Self { function }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl BiFunction<()> {
    /// Wraps an infallible closure.
    pub fn wrap<T, U, R, E, P>(mut plain: P) -> BiFunction<impl FnMut(T, U) -> Result<R, E>>
    where
        P: FnMut(T, U) -> R,
    {
        BiFunction::new(move |first: T, second: U| Ok::<R, E>(plain(first, second)))
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<T, U, R, E, P>(
        plain: Option<P>,
    ) -> Result<BiFunction<impl FnMut(T, U) -> Result<R, E>>, UsageError>
    where
        P: FnMut(T, U) -> R,
    {
        require(plain, "function").map(Self::wrap::<T, U, R, E, P>)
    }
}

impl<T, U, R, E, F> ThrowingBiFunction<T, U, R, E> for BiFunction<F>
where
    F: FnMut(T, U) -> Result<R, E>,
{
    #[inline]
    fn apply_throwing(&mut self, first: T, second: U) -> Result<R, E> {
        (self.function)(first, second)
    }
}

/// Creates a [`BiFunction`] from a closure returning `Result`.
#[inline]
pub const fn bi_function<T, U, R, E, F>(function: F) -> BiFunction<F>
where
    F: FnMut(T, U) -> Result<R, E>,
{
    BiFunction::new(function)
}

/// A two-argument function followed by a one-argument function, see
/// [`ThrowingBiFunction::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct BiFunctionAndThen<A, B, M> {
    first: A,
    second: B,
    _middle: PhantomData<fn() -> M>,
}

impl<T, U, M, R, E, A, B> ThrowingBiFunction<T, U, R, E> for BiFunctionAndThen<A, B, M>
where
    A: ThrowingBiFunction<T, U, M, E>,
    B: ThrowingFunction<M, R, E>,
{
    fn apply_throwing(&mut self, first: T, second: U) -> Result<R, E> {
        let middle = self.first.apply_throwing(first, second)?;
        self.second.apply_throwing(middle)
    }
}
