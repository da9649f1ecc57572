//! One-argument tests.
//!
//! Predicates borrow their input, like the closures taken by
//! `Iterator::filter`. The combinators short-circuit: [`ThrowingPredicate::and`]
//! does not evaluate its second operand when the first yields `false`,
//! [`ThrowingPredicate::or`] does not evaluate it when the first yields
//! `true`, and a failing operand stops evaluation immediately.

use std::marker::PhantomData;

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

/// A test on a `T` that may fail with `E`.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{Predicate, ThrowingPredicate};
/// use std::num::ParseIntError;
///
/// let is_even = Predicate::new(|text: &str| Ok::<_, ParseIntError>(text.parse::<i32>()? % 2 == 0));
/// let is_short = Predicate::new(|text: &str| Ok::<_, ParseIntError>(text.len() < 3));
/// let mut short_and_even = is_short.and(is_even);
///
/// assert_eq!(short_and_even.test("42").ok(), Some(true));
/// assert_eq!(short_and_even.test("1000").ok(), Some(false));
/// assert!(short_and_even.test("x").is_err());
/// ```
pub trait ThrowingPredicate<T: ?Sized, E> {
    /// Evaluates this predicate on `input`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped test fails with.
    fn test_throwing(&mut self, input: &T) -> Result<bool, E>;

    /// Evaluates this predicate, failing with an [`Exception`].
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped test as an [`Exception`].
    fn test(&mut self, input: &T) -> Result<bool, Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.test_throwing(input))
    }

    /// Returns the logical negation of this predicate.
    fn negate(self) -> PredicateNot<Self>
    where
        Self: Sized,
    {
        PredicateNot { inner: self }
    }

    /// Returns the short-circuiting logical AND of this predicate and `other`.
    fn and<G>(self, other: G) -> PredicateAnd<Self, G>
    where
        Self: Sized,
        G: ThrowingPredicate<T, E>,
    {
        PredicateAnd {
            first: self,
            second: other,
        }
    }

    /// Returns the short-circuiting logical OR of this predicate and `other`.
    fn or<G>(self, other: G) -> PredicateOr<Self, G>
    where
        Self: Sized,
        G: ThrowingPredicate<T, E>,
    {
        PredicateOr {
            first: self,
            second: other,
        }
    }

    /// Re-types this predicate so that its declared error is [`Exception`].
    fn erased(self) -> ErasedPredicate<Self, E>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        ErasedPredicate {
            inner: self,
            _error: PhantomData,
        }
    }

    /// Returns the ordinary-callback view of this predicate.
    fn unthrow(mut self) -> impl FnMut(&T) -> Result<bool, Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |input: &T| self.test(input)
    }

    /// Returns a plain `FnMut(&T) -> bool` that raises failures by unwinding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::adapter::{Predicate, ThrowingPredicate};
    /// use throwing::sneaky::catch_unchecked;
    ///
    /// let mut positive = Predicate::new(|text: &&str| Ok::<_, std::num::ParseIntError>(text.parse::<i32>()? > 0))
    ///     .unchecked();
    /// let kept = catch_unchecked(|| ["3", "-1", "8"].into_iter().filter(|text| positive(text)).count());
    /// assert_eq!(kept.ok(), Some(2));
    /// ```
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut(&T) -> bool
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move |input: &T| sneaky_unwrap(self.test_throwing(input))
    }
}

impl<T, E, A> ThrowingPredicate<T, E> for &mut A
where
    T: ?Sized,
    A: ThrowingPredicate<T, E> + ?Sized,
{
    fn test_throwing(&mut self, input: &T) -> Result<bool, E> {
        (**self).test_throwing(input)
    }
}

/// A [`ThrowingPredicate`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<F> {
    predicate: F,
}

impl<F> Predicate<F> {
    /// Creates a predicate from a closure returning `Result<bool, E>`.
    #[inline]
    pub const fn new<T, E>(predicate: F) -> Self
    where
        T: ?Sized,
        F: FnMut(&T) -> Result<bool, E>,
    {
        Self { predicate }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.predicate
    }
}

impl Predicate<()> {
    /// Wraps an infallible closure.
    pub fn wrap<T, E, P>(mut plain: P) -> Predicate<impl FnMut(&T) -> Result<bool, E>>
    where
        T: ?Sized,
        P: FnMut(&T) -> bool,
    {
        Predicate::new(move |input: &T| Ok::<bool, E>(plain(input)))
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<T, E, P>(
        plain: Option<P>,
    ) -> Result<Predicate<impl FnMut(&T) -> Result<bool, E>>, UsageError>
    where
        T: ?Sized,
        P: FnMut(&T) -> bool,
    {
        require(plain, "predicate").map(Self::wrap::<T, E, P>)
    }
}

impl<T, E, F> ThrowingPredicate<T, E> for Predicate<F>
where
    T: ?Sized,
    F: FnMut(&T) -> Result<bool, E>,
{
    #[inline]
    fn test_throwing(&mut self, input: &T) -> Result<bool, E> {
        (self.predicate)(input)
    }
}

/// Creates a [`Predicate`] from a closure returning `Result<bool, E>`.
#[inline]
pub const fn predicate<T, E, F>(predicate: F) -> Predicate<F>
where
    T: ?Sized,
    F: FnMut(&T) -> Result<bool, E>,
{
    Predicate::new(predicate)
}

/// Returns the negation of `target`.
#[inline]
pub fn not<T, E, P>(target: P) -> PredicateNot<P>
where
    T: ?Sized,
    P: ThrowingPredicate<T, E>,
{
    target.negate()
}

/// A predicate that holds for every input and never fails.
pub fn always_true<T, E>() -> Predicate<impl FnMut(&T) -> Result<bool, E> + Copy>
where
    T: ?Sized,
{
    Predicate::new(|_: &T| Ok::<bool, E>(true))
}

/// A predicate that holds for no input and never fails.
pub fn always_false<T, E>() -> Predicate<impl FnMut(&T) -> Result<bool, E> + Copy>
where
    T: ?Sized,
{
    Predicate::new(|_: &T| Ok::<bool, E>(false))
}

/// See [`ThrowingPredicate::negate`].
#[derive(Debug, Clone, Copy)]
pub struct PredicateNot<A> {
    inner: A,
}

impl<T, E, A> ThrowingPredicate<T, E> for PredicateNot<A>
where
    T: ?Sized,
    A: ThrowingPredicate<T, E>,
{
    fn test_throwing(&mut self, input: &T) -> Result<bool, E> {
        self.inner.test_throwing(input).map(|result| !result)
    }
}

/// See [`ThrowingPredicate::and`].
#[derive(Debug, Clone, Copy)]
pub struct PredicateAnd<A, B> {
    first: A,
    second: B,
}

impl<T, E, A, B> ThrowingPredicate<T, E> for PredicateAnd<A, B>
where
    T: ?Sized,
    A: ThrowingPredicate<T, E>,
    B: ThrowingPredicate<T, E>,
{
    fn test_throwing(&mut self, input: &T) -> Result<bool, E> {
        Ok(self.first.test_throwing(input)? && self.second.test_throwing(input)?)
    }
}

/// See [`ThrowingPredicate::or`].
#[derive(Debug, Clone, Copy)]
pub struct PredicateOr<A, B> {
    first: A,
    second: B,
}

impl<T, E, A, B> ThrowingPredicate<T, E> for PredicateOr<A, B>
where
    T: ?Sized,
    A: ThrowingPredicate<T, E>,
    B: ThrowingPredicate<T, E>,
{
    fn test_throwing(&mut self, input: &T) -> Result<bool, E> {
        Ok(self.first.test_throwing(input)? || self.second.test_throwing(input)?)
    }
}

/// A predicate whose declared error is [`Exception`], see
/// [`ThrowingPredicate::erased`].
#[derive(Debug, Clone, Copy)]
pub struct ErasedPredicate<A, E> {
    inner: A,
    _error: PhantomData<fn() -> E>,
}

impl<T, E, A> ThrowingPredicate<T, Exception> for ErasedPredicate<A, E>
where
    T: ?Sized,
    A: ThrowingPredicate<T, E>,
    E: Into<Exception>,
{
    fn test_throwing(&mut self, input: &T) -> Result<bool, Exception> {
        self.inner.test(input)
    }
}
