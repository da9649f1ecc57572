//! One-argument procedures.

use std::marker::PhantomData;

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

/// An operation on a `T` that produces no result and may fail with `E`.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{Consumer, ThrowingConsumer};
/// use std::fmt::Write;
///
/// let mut buffer = String::from("first");
/// let mut append = Consumer::new(|text: &str| buffer.write_str(text));
///
/// assert!(append.accept("second").is_ok());
/// drop(append);
/// assert_eq!(buffer, "firstsecond");
/// ```
pub trait ThrowingConsumer<T, E> {
    /// Performs this operation on `input`, failing with the concrete error type.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped operation fails with.
    fn accept_throwing(&mut self, input: T) -> Result<(), E>;

    /// Performs this operation on `input`, failing with an [`Exception`].
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped operation as an [`Exception`].
    fn accept(&mut self, input: T) -> Result<(), Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.accept_throwing(input))
    }

    /// Returns a consumer that performs `self`, then `after`, on the same input.
    ///
    /// `after` is not performed if `self` fails. `self` receives a clone of
    /// the input and `after` receives the original.
    fn and_then<G>(self, after: G) -> ConsumerAndThen<Self, G>
    where
        Self: Sized,
        G: ThrowingConsumer<T, E>,
        T: Clone,
    {
        ConsumerAndThen {
            first: self,
            second: after,
        }
    }

    /// Returns a consumer that performs `before`, then `self`, on the same input.
    ///
    /// `self` is not performed if `before` fails.
    fn compose<G>(self, before: G) -> ConsumerAndThen<G, Self>
    where
        Self: Sized,
        G: ThrowingConsumer<T, E>,
        T: Clone,
    {
        ConsumerAndThen {
            first: before,
            second: self,
        }
    }

    /// Re-types this consumer so that its declared error is [`Exception`].
    fn erased(self) -> ErasedConsumer<Self, E>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        ErasedConsumer {
            inner: self,
            _error: PhantomData,
        }
    }

    /// Returns the ordinary-callback view of this consumer.
    fn unthrow(mut self) -> impl FnMut(T) -> Result<(), Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |input| self.accept(input)
    }

    /// Returns a plain `FnMut(T)` that raises failures by unwinding.
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut(T)
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |input| sneaky_unwrap(self.accept_throwing(input))
    }
}

impl<T, E, A> ThrowingConsumer<T, E> for &mut A
where
    A: ThrowingConsumer<T, E> + ?Sized,
{
    fn accept_throwing(&mut self, input: T) -> Result<(), E> {
        (**self).accept_throwing(input)
    }
}

/// A [`ThrowingConsumer`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct Consumer<F> {
    consumer: F,
}

impl<F> Consumer<F> {
    /// Creates a consumer from a closure returning `Result<(), E>`.
    ///
    /// The closure keeps the signature it is written with, so a closure
    /// annotated as `|text: &mut String|` accepts borrows of any lifetime.
    #[inline]
    pub const fn new(consumer: F) -> Self {
        Self { consumer }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.consumer
    }
}

impl Consumer<()> {
    /// Wraps an infallible closure. The error type is left to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::adapter::Consumer;
    /// use throwing::value::with;
    /// use std::convert::Infallible;
    ///
    /// let sorted = with(vec![3, 1, 2], Consumer::wrap::<Infallible, _>(|values: &mut Vec<i32>| values.sort_unstable()));
    /// assert_eq!(sorted, Ok(vec![1, 2, 3]));
    /// ```
    #[inline]
    pub const fn wrap<E, P>(plain: P) -> WrappedConsumer<P, E> {
        WrappedConsumer {
            plain,
            _error: PhantomData,
        }
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<E, P>(plain: Option<P>) -> Result<WrappedConsumer<P, E>, UsageError> {
        require(plain, "consumer").map(Self::wrap::<E, P>)
    }
}

impl<T, E, F> ThrowingConsumer<T, E> for Consumer<F>
where
    F: FnMut(T) -> Result<(), E>,
{
    #[inline]
    fn accept_throwing(&mut self, input: T) -> Result<(), E> {
        (self.consumer)(input)
    }
}

/// Creates a [`Consumer`] from a closure returning `Result<(), E>`.
#[inline]
pub const fn consumer<F>(consumer: F) -> Consumer<F> {
    Consumer::new(consumer)
}

/// An infallible closure seen as a [`ThrowingConsumer`], see [`Consumer::wrap`].
#[derive(Debug, Clone, Copy)]
pub struct WrappedConsumer<P, E> {
    plain: P,
    _error: PhantomData<fn() -> E>,
}

impl<T, E, P> ThrowingConsumer<T, E> for WrappedConsumer<P, E>
where
    P: FnMut(T),
{
    #[inline]
    fn accept_throwing(&mut self, input: T) -> Result<(), E> {
        (self.plain)(input);
        Ok(())
    }
}

/// Two consumers performed in sequence, see [`ThrowingConsumer::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct ConsumerAndThen<A, B> {
    first: A,
    second: B,
}

impl<T, E, A, B> ThrowingConsumer<T, E> for ConsumerAndThen<A, B>
where
    A: ThrowingConsumer<T, E>,
    B: ThrowingConsumer<T, E>,
    T: Clone,
{
    fn accept_throwing(&mut self, input: T) -> Result<(), E> {
        self.first.accept_throwing(input.clone())?;
        self.second.accept_throwing(input)
    }
}

/// A consumer whose declared error is [`Exception`], see
/// [`ThrowingConsumer::erased`].
#[derive(Debug, Clone, Copy)]
pub struct ErasedConsumer<A, E> {
    inner: A,
    _error: PhantomData<fn() -> E>,
}

impl<T, E, A> ThrowingConsumer<T, Exception> for ErasedConsumer<A, E>
where
    A: ThrowingConsumer<T, E>,
    E: Into<Exception>,
{
    fn accept_throwing(&mut self, input: T) -> Result<(), Exception> {
        self.inner.accept(input)
    }
}
