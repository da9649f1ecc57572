//! Two-argument procedures.

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

/// An operation on a `T` and a `U` that produces no result and may fail with `E`.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{BiConsumer, ThrowingBiConsumer};
/// use std::collections::HashMap;
///
/// let mut scores = HashMap::new();
/// let mut record = BiConsumer::new(|name: &str, score: u32| {
///     scores.insert(name.to_string(), score);
///     Ok::<_, std::fmt::Error>(())
/// });
///
/// record.accept("ada", 3).unwrap();
/// drop(record);
/// assert_eq!(scores.get("ada"), Some(&3));
/// ```
pub trait ThrowingBiConsumer<T, U, E> {
    /// Performs this operation on the given arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped operation fails with.
    fn accept_throwing(&mut self, first: T, second: U) -> Result<(), E>;

    /// Performs this operation, failing with an [`Exception`].
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped operation as an [`Exception`].
    fn accept(&mut self, first: T, second: U) -> Result<(), Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.accept_throwing(first, second))
    }

    /// Returns a consumer that performs `self`, then `after`, on the same
    /// arguments. `after` is not performed if `self` fails.
    fn and_then<G>(self, after: G) -> BiConsumerAndThen<Self, G>
    where
        Self: Sized,
        G: ThrowingBiConsumer<T, U, E>,
        T: Clone,
        U: Clone,
    {
        BiConsumerAndThen {
            first: self,
            second: after,
        }
    }

    /// Returns a consumer that performs `before`, then `self`, on the same
    /// arguments.
    fn compose<G>(self, before: G) -> BiConsumerAndThen<G, Self>
    where
        Self: Sized,
        G: ThrowingBiConsumer<T, U, E>,
        T: Clone,
        U: Clone,
    {
        BiConsumerAndThen {
            first: before,
            second: self,
        }
    }

    /// Returns the ordinary-callback view of this consumer.
    fn unthrow(mut self) -> impl FnMut(T, U) -> Result<(), Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |first, second| self.accept(first, second)
    }

    /// Returns a plain `FnMut(T, U)` that raises failures by unwinding.
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut(T, U)
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |first, second| sneaky_unwrap(self.accept_throwing(first, second))
    }
}

impl<T, U, E, A> ThrowingBiConsumer<T, U, E> for &mut A
where
    A: ThrowingBiConsumer<T, U, E> + ?Sized,
{
    fn accept_throwing(&mut self, first: T, second: U) -> Result<(), E> {
        (**self).accept_throwing(first, second)
    }
}

/// A [`ThrowingBiConsumer`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct BiConsumer<F> {
    consumer: F,
}

impl<F> BiConsumer<F> {
    /// Creates a consumer from a closure returning `Result<(), E>`.
    #[inline]
    pub const fn new<T, U, E>(consumer: F) -> Self
    where
        F: FnMut(T, U) -> Result<(), E>,
    {
        Self { consumer }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.consumer
    }
}

impl BiConsumer<()> {
    /// Wraps an infallible closure.
    pub fn wrap<T, U, E, P>(mut plain: P) -> BiConsumer<impl FnMut(T, U) -> Result<(), E>>
    where
        P: FnMut(T, U),
    {
        BiConsumer::new(move |first: T, second: U| {
            plain(first, second);
            Ok::<(), E>(())
        })
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<T, U, E, P>(
        plain: Option<P>,
    ) -> Result<BiConsumer<impl FnMut(T, U) -> Result<(), E>>, UsageError>
    where
        P: FnMut(T, U),
    {
        require(plain, "consumer").map(Self::wrap::<T, U, E, P>)
    }
}

impl<T, U, E, F> ThrowingBiConsumer<T, U, E> for BiConsumer<F>
where
    F: FnMut(T, U) -> Result<(), E>,
{
    #[inline]
    fn accept_throwing(&mut self, first: T, second: U) -> Result<(), E> {
        (self.consumer)(first, second)
    }
}

/// Creates a [`BiConsumer`] from a closure returning `Result<(), E>`.
#[inline]
pub const fn bi_consumer<T, U, E, F>(consumer: F) -> BiConsumer<F>
where
    F: FnMut(T, U) -> Result<(), E>,
{
    BiConsumer::new(consumer)
}

/// Two consumers performed in sequence, see [`ThrowingBiConsumer::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct BiConsumerAndThen<A, B> {
    first: A,
    second: B,
}

impl<T, U, E, A, B> ThrowingBiConsumer<T, U, E> for BiConsumerAndThen<A, B>
where
    A: ThrowingBiConsumer<T, U, E>,
    B: ThrowingBiConsumer<T, U, E>,
    T: Clone,
    U: Clone,
{
    fn accept_throwing(&mut self, first: T, second: U) -> Result<(), E> {
        self.first.accept_throwing(first.clone(), second.clone())?;
        self.second.accept_throwing(first, second)
    }
}
