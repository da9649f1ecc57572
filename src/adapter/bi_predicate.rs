//! Two-argument tests.

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

/// A test on a `T` and a `U` that may fail with `E`.
///
/// The logical combinators short-circuit the same way as those of
/// [`ThrowingPredicate`](super::ThrowingPredicate).
pub trait ThrowingBiPredicate<T: ?Sized, U: ?Sized, E> {
    /// Evaluates this predicate on the given arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped test fails with.
    fn test_throwing(&mut self, first: &T, second: &U) -> Result<bool, E>;

    /// Evaluates this predicate, failing with an [`Exception`].
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped test as an [`Exception`].
    fn test(&mut self, first: &T, second: &U) -> Result<bool, Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.test_throwing(first, second))
    }

    /// Returns the logical negation of this predicate.
    fn negate(self) -> BiPredicateNot<Self>
    where
        Self: Sized,
    {
        BiPredicateNot { inner: self }
    }

    /// Returns the short-circuiting logical AND of this predicate and `other`.
    fn and<G>(self, other: G) -> BiPredicateAnd<Self, G>
    where
        Self: Sized,
        G: ThrowingBiPredicate<T, U, E>,
    {
        BiPredicateAnd {
            first: self,
            second: other,
        }
    }

    /// Returns the short-circuiting logical OR of this predicate and `other`.
    fn or<G>(self, other: G) -> BiPredicateOr<Self, G>
    where
        Self: Sized,
        G: ThrowingBiPredicate<T, U, E>,
    {
        BiPredicateOr {
            first: self,
            second: other,
        }
    }

    /// Returns the ordinary-callback view of this predicate.
    fn unthrow(mut self) -> impl FnMut(&T, &U) -> Result<bool, Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |first: &T, second: &U| self.test(first, second)
    }

    /// Returns a plain `FnMut(&T, &U) -> bool` that raises failures by
    /// unwinding.
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut(&T, &U) -> bool
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |first: &T, second: &U| sneaky_unwrap(self.test_throwing(first, second))
    }
}

impl<T, U, E, A> ThrowingBiPredicate<T, U, E> for &mut A
where
    T: ?Sized,
    U: ?Sized,
    A: ThrowingBiPredicate<T, U, E> + ?Sized,
{
    fn test_throwing(&mut self, first: &T, second: &U) -> Result<bool, E> {
        (**self).test_throwing(first, second)
    }
}

/// A [`ThrowingBiPredicate`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct BiPredicate<F> {
    predicate: F,
}

impl<F> BiPredicate<F> {
    /// Creates a predicate from a closure returning `Result<bool, E>`.
    #[inline]
    pub const fn new<T, U, E>(predicate: F) -> Self
    where
        T: ?Sized,
        U: ?Sized,
        F: FnMut(&T, &U) -> Result<bool, E>,
    {
        Self { predicate }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.predicate
    }
}

impl BiPredicate<()> {
    /// Wraps an infallible closure.
    pub fn wrap<T, U, E, P>(mut plain: P) -> BiPredicate<impl FnMut(&T, &U) -> Result<bool, E>>
    where
        T: ?Sized,
        U: ?Sized,
        P: FnMut(&T, &U) -> bool,
    {
        BiPredicate::new(move |first: &T, second: &U| Ok::<bool, E>(plain(first, second)))
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<T, U, E, P>(
        plain: Option<P>,
    ) -> Result<BiPredicate<impl FnMut(&T, &U) -> Result<bool, E>>, UsageError>
    where
        T: ?Sized,
        U: ?Sized,
        P: FnMut(&T, &U) -> bool,
    {
        require(plain, "predicate").map(Self::wrap::<T, U, E, P>)
    }
}

impl<T, U, E, F> ThrowingBiPredicate<T, U, E> for BiPredicate<F>
where
    T: ?Sized,
    U: ?Sized,
    F: FnMut(&T, &U) -> Result<bool, E>,
{
    #[inline]
    fn test_throwing(&mut self, first: &T, second: &U) -> Result<bool, E> {
        (self.predicate)(first, second)
    }
}

/// Creates a [`BiPredicate`] from a closure returning `Result<bool, E>`.
#[inline]
pub const fn bi_predicate<T, U, E, F>(predicate: F) -> BiPredicate<F>
where
    T: ?Sized,
    U: ?Sized,
    F: FnMut(&T, &U) -> Result<bool, E>,
{
    BiPredicate::new(predicate)
}

/// See [`ThrowingBiPredicate::negate`].
#[derive(Debug, Clone, Copy)]
pub struct BiPredicateNot<A> {
    inner: A,
}

impl<T, U, E, A> ThrowingBiPredicate<T, U, E> for BiPredicateNot<A>
where
    T: ?Sized,
    U: ?Sized,
    A: ThrowingBiPredicate<T, U, E>,
{
    fn test_throwing(&mut self, first: &T, second: &U) -> Result<bool, E> {
        self.inner.test_throwing(first, second).map(|result| !result)
    }
}

/// See [`ThrowingBiPredicate::and`].
#[derive(Debug, Clone, Copy)]
pub struct BiPredicateAnd<A, B> {
    first: A,
    second: B,
}

impl<T, U, E, A, B> ThrowingBiPredicate<T, U, E> for BiPredicateAnd<A, B>
where
    T: ?Sized,
    U: ?Sized,
    A: ThrowingBiPredicate<T, U, E>,
    B: ThrowingBiPredicate<T, U, E>,
{
    fn test_throwing(&mut self, first: &T, second: &U) -> Result<bool, E> {
        Ok(self.first.test_throwing(first, second)? && self.second.test_throwing(first, second)?)
    }
}

/// See [`ThrowingBiPredicate::or`].
#[derive(Debug, Clone, Copy)]
pub struct BiPredicateOr<A, B> {
    first: A,
    second: B,
}

impl<T, U, E, A, B> ThrowingBiPredicate<T, U, E> for BiPredicateOr<A, B>
where
    T: ?Sized,
    U: ?Sized,
    A: ThrowingBiPredicate<T, U, E>,
    B: ThrowingBiPredicate<T, U, E>,
{
    fn test_throwing(&mut self, first: &T, second: &U) -> Result<bool, E> {
        Ok(self.first.test_throwing(first, second)? || self.second.test_throwing(first, second)?)
    }
}
