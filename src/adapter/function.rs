//! One-argument transforms.

use std::marker::PhantomData;

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

/// A transform from `T` to `R` that may fail with `E`.
///
/// The required method, [`apply_throwing`](Self::apply_throwing), is the
/// declared-throwing entry point. [`apply`](Self::apply) is the exposed entry
/// point: the same computation with the error widened into an
/// [`Exception`].
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{Function, ThrowingFunction};
/// use std::num::ParseIntError;
///
/// let mut parse = Function::new(|text: &str| text.parse::<i32>());
///
/// assert_eq!(parse.apply_throwing("7"), Ok(7));
/// assert!(parse.apply("seven").unwrap_err().is::<ParseIntError>());
/// ```
pub trait ThrowingFunction<T, R, E> {
    /// Applies this function to `input`, failing with the concrete error type.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped computation fails with.
    fn apply_throwing(&mut self, input: T) -> Result<R, E>;

    /// Applies this function to `input`, failing with an [`Exception`].
    ///
    /// The result of [`apply_throwing`](Self::apply_throwing) is forwarded
    /// unchanged; only the static type of the error is widened.
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped computation as an [`Exception`].
    fn apply(&mut self, input: T) -> Result<R, Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.apply_throwing(input))
    }

    /// Returns a function that applies `self`, then `after` to the result.
    ///
    /// `after` is not invoked if `self` fails; the error is relayed as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::adapter::{Function, ThrowingFunction};
    /// use std::num::ParseIntError;
    ///
    /// let parse = Function::new(|text: &str| text.parse::<i32>());
    /// let double = Function::new(|value: i32| Ok::<_, ParseIntError>(value * 2));
    /// let mut parse_then_double = parse.and_then(double);
    ///
    /// assert_eq!(parse_then_double.apply_throwing("21"), Ok(42));
    /// ```
    fn and_then<V, G>(self, after: G) -> FunctionAndThen<Self, G, R>
    where
        Self: Sized,
        G: ThrowingFunction<R, V, E>,
    {
        FunctionAndThen::new(self, after)
    }

    /// Returns a function that applies `before`, then `self` to the result.
    ///
    /// `self` is not invoked if `before` fails.
    fn compose<V, G>(self, before: G) -> FunctionAndThen<G, Self, T>
    where
        Self: Sized,
        G: ThrowingFunction<V, T, E>,
    {
        FunctionAndThen::new(before, self)
    }

    /// Re-types this function so that its declared error is [`Exception`].
    ///
    /// Useful to chain functions whose error types differ.
    fn erased(self) -> ErasedFunction<Self, E>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        ErasedFunction::new(self)
    }

    /// Returns the ordinary-callback view of this function.
    fn unthrow(mut self) -> impl FnMut(T) -> Result<R, Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |input| self.apply(input)
    }

    /// Returns a plain `FnMut(T) -> R` that raises failures by unwinding.
    ///
    /// Run the callback inside [`catch_unchecked`](crate::sneaky::catch_unchecked)
    /// to get the error back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::adapter::{Function, ThrowingFunction};
    /// use throwing::sneaky::catch_unchecked;
    ///
    /// let parse = Function::new(|text: &str| text.parse::<i32>()).unchecked();
    /// let result = catch_unchecked(|| ["1", "x"].into_iter().map(parse).collect::<Vec<_>>());
    /// assert!(result.unwrap_err().is::<std::num::ParseIntError>());
    /// ```
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut(T) -> R
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |input| sneaky_unwrap(self.apply_throwing(input))
    }
}

impl<T, R, E, A> ThrowingFunction<T, R, E> for &mut A
where
    A: ThrowingFunction<T, R, E> + ?Sized,
{
    fn apply_throwing(&mut self, input: T) -> Result<R, E> {
        (**self).apply_throwing(input)
    }
}

/// A [`ThrowingFunction`] backed by a closure returning `Result`.
#[derive(Debug, Clone, Copy)]
pub struct Function<F> {
    function: F,
}

impl<F> Function<F> {
    /// Creates a function from a closure returning `Result`.
    ///
    /// The closure keeps the signature it is written with, so a closure
    /// annotated as `|error: &Exception|` accepts borrows of any lifetime.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl Function<()> {
    /// Wraps an infallible closure. The error type is left to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::adapter::{Function, ThrowingFunction};
    ///
    /// let mut length = Function::wrap(|text: &str| text.len());
    /// let result: Result<usize, std::fmt::Error> = length.apply_throwing("four");
    /// assert_eq!(result, Ok(4));
    /// ```
    #[inline]
    pub const fn wrap<E, P>(plain: P) -> WrappedFunction<P, E> {
        WrappedFunction {
            plain,
            _error: PhantomData,
        }
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<E, P>(plain: Option<P>) -> Result<WrappedFunction<P, E>, UsageError> {
        require(plain, "function").map(Self::wrap::<E, P>)
    }
}

impl<T, R, E, F> ThrowingFunction<T, R, E> for Function<F>
where
    F: FnMut(T) -> Result<R, E>,
{
    #[inline]
    fn apply_throwing(&mut self, input: T) -> Result<R, E> {
        (self.function)(input)
    }
}

/// Creates a [`Function`] from a closure returning `Result`.
#[inline]
pub const fn function<F>(function: F) -> Function<F> {
    Function::new(function)
}

/// An infallible closure seen as a [`ThrowingFunction`], see [`Function::wrap`].
#[derive(Debug, Clone, Copy)]
pub struct WrappedFunction<P, E> {
    plain: P,
    _error: PhantomData<fn() -> E>,
}

impl<T, R, E, P> ThrowingFunction<T, R, E> for WrappedFunction<P, E>
where
    P: FnMut(T) -> R,
{
    #[inline]
    fn apply_throwing(&mut self, input: T) -> Result<R, E> {
        Ok((self.plain)(input))
    }
}

/// Two functions applied in sequence, see [`ThrowingFunction::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct FunctionAndThen<A, B, M> {
    first: A,
    second: B,
    _middle: PhantomData<fn() -> M>,
}

impl<A, B, M> FunctionAndThen<A, B, M> {
    const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            _middle: PhantomData,
        }
    }
}

impl<T, M, R, E, A, B> ThrowingFunction<T, R, E> for FunctionAndThen<A, B, M>
where
    A: ThrowingFunction<T, M, E>,
    B: ThrowingFunction<M, R, E>,
{
    fn apply_throwing(&mut self, input: T) -> Result<R, E> {
        let middle = self.first.apply_throwing(input)?;
        self.second.apply_throwing(middle)
    }
}

/// A function whose declared error is [`Exception`], see
/// [`ThrowingFunction::erased`].
#[derive(Debug, Clone, Copy)]
pub struct ErasedFunction<A, E> {
    inner: A,
    _error: PhantomData<fn() -> E>,
}

impl<A, E> ErasedFunction<A, E> {
    const fn new(inner: A) -> Self {
        Self {
            inner,
            _error: PhantomData,
        }
    }
}

impl<T, R, E, A> ThrowingFunction<T, R, Exception> for ErasedFunction<A, E>
where
    A: ThrowingFunction<T, R, E>,
    E: Into<Exception>,
{
    fn apply_throwing(&mut self, input: T) -> Result<R, Exception> {
        self.inner.apply(input)
    }
}
