//! Zero-argument producers.

use std::marker::PhantomData;

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

use super::function::ThrowingFunction;

/// A producer of `T` values that may fail with `E`.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::{Supplier, ThrowingSupplier};
///
/// let mut read = Supplier::new(|| std::env::var("THROWING_DOC_UNSET_VARIABLE"));
/// assert!(read.get().unwrap_err().is::<std::env::VarError>());
/// ```
pub trait ThrowingSupplier<T, E> {
    /// Produces a value, failing with the concrete error type.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped producer fails with.
    fn get_throwing(&mut self) -> Result<T, E>;

    /// Produces a value, failing with an [`Exception`].
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped producer as an [`Exception`].
    fn get(&mut self) -> Result<T, Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.get_throwing())
    }

    /// Returns a supplier that feeds the produced value into `after`.
    ///
    /// `after` is not invoked if `self` fails.
    fn and_then<R, G>(self, after: G) -> SupplierAndThen<Self, G, T>
    where
        Self: Sized,
        G: ThrowingFunction<T, R, E>,
    {
        SupplierAndThen {
            supplier: self,
            function: after,
            _value: PhantomData,
        }
    }

    /// Returns the ordinary-callback view of this supplier.
    fn unthrow(mut self) -> impl FnMut() -> Result<T, Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move || self.get()
    }

    /// Returns a plain `FnMut() -> T` that raises failures by unwinding.
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut() -> T
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move || sneaky_unwrap(self.get_throwing())
    }
}

impl<T, E, A> ThrowingSupplier<T, E> for &mut A
where
    A: ThrowingSupplier<T, E> + ?Sized,
{
    fn get_throwing(&mut self) -> Result<T, E> {
        (**self).get_throwing()
    }
}

/// A [`ThrowingSupplier`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct Supplier<F> {
    supplier: F,
}

impl<F> Supplier<F> {
    /// Creates a supplier from a closure returning `Result`.
    #[inline]
    pub const fn new<T, E>(supplier: F) -> Self
    where
        F: FnMut() -> Result<T, E>,
    {
        Self { supplier }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.supplier
    }
}

impl Supplier<()> {
    /// Wraps an infallible closure.
    pub fn wrap<T, E, P>(mut plain: P) -> Supplier<impl FnMut() -> Result<T, E>>
    where
        P: FnMut() -> T,
    {
        Supplier::new(move || Ok::<T, E>(plain()))
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<T, E, P>(
        plain: Option<P>,
    ) -> Result<Supplier<impl FnMut() -> Result<T, E>>, UsageError>
    where
        P: FnMut() -> T,
    {
        require(plain, "supplier").map(Self::wrap::<T, E, P>)
    }
}

impl<T, E, F> ThrowingSupplier<T, E> for Supplier<F>
where
    F: FnMut() -> Result<T, E>,
{
    #[inline]
    fn get_throwing(&mut self) -> Result<T, E> {
        (self.supplier)()
    }
}

/// Creates a [`Supplier`] from a closure returning `Result`.
#[inline]
pub const fn supplier<T, E, F>(supplier: F) -> Supplier<F>
where
    F: FnMut() -> Result<T, E>,
{
    Supplier::new(supplier)
}

/// A supplier followed by a function, see [`ThrowingSupplier::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct SupplierAndThen<S, G, M> {
    supplier: S,
    function: G,
    _value: PhantomData<fn() -> M>,
}

impl<T, R, E, S, G> ThrowingSupplier<R, E> for SupplierAndThen<S, G, T>
where
    S: ThrowingSupplier<T, E>,
    G: ThrowingFunction<T, R, E>,
{
    fn get_throwing(&mut self) -> Result<R, E> {
        let value = self.supplier.get_throwing()?;
        self.function.apply_throwing(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Function;
    use rstest::rstest;
    use std::fmt;

    #[derive(Debug, PartialEq, Eq)]
    struct Exhausted;

    impl fmt::Display for Exhausted {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("exhausted")
        }
    }

    impl std::error::Error for Exhausted {}

    #[rstest]
    fn test_get_returns_value_unchanged() {
        let mut supply = Supplier::new(|| Ok::<_, Exhausted>(String::from("firstsecond")));
        assert_eq!(supply.get().ok().as_deref(), Some("firstsecond"));
    }

    #[rstest]
    fn test_get_preserves_error() {
        let mut supply = Supplier::new(|| Err::<i32, _>(Exhausted));
        assert_eq!(supply.get().unwrap_err().downcast_ref::<Exhausted>(), Some(&Exhausted));
    }

    #[rstest]
    fn test_and_then_feeds_function() {
        let mut remaining = vec![1, 2];
        let pop = Supplier::new(|| remaining.pop().ok_or(Exhausted));
        let double = Function::new(|value: i32| Ok::<_, Exhausted>(value * 2));
        let mut doubled = pop.and_then(double);

        assert_eq!(doubled.get_throwing(), Ok(4));
        assert_eq!(doubled.get_throwing(), Ok(2));
        assert_eq!(doubled.get_throwing(), Err(Exhausted));
    }

    #[rstest]
    fn test_try_wrap_missing_supplier() {
        let missing: Option<fn() -> i32> = None;
        assert!(Supplier::try_wrap::<i32, Exhausted, _>(missing).is_err());
    }
}
