//! Zero-argument procedures.

use crate::exception::{Exception, UsageError, require};
use crate::sneaky::rethrow;
#[cfg(feature = "unchecked")]
use crate::sneaky::sneaky_unwrap;

/// An action that takes no input, produces no result and may fail with `E`.
pub trait ThrowingRunnable<E> {
    /// Runs this action, failing with the concrete error type.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped action fails with.
    fn run_throwing(&mut self) -> Result<(), E>;

    /// Runs this action, failing with an [`Exception`].
    ///
    /// # Errors
    ///
    /// Returns the error of the wrapped action as an [`Exception`].
    fn run(&mut self) -> Result<(), Exception>
    where
        E: Into<Exception>,
    {
        rethrow(self.run_throwing())
    }

    /// Returns an action that runs `self`, then `after`.
    ///
    /// `after` is not run if `self` fails.
    fn and_then<G>(self, after: G) -> RunnableAndThen<Self, G>
    where
        Self: Sized,
        G: ThrowingRunnable<E>,
    {
        RunnableAndThen {
            first: self,
            second: after,
        }
    }

    /// Returns an action that runs `before`, then `self`.
    fn compose<G>(self, before: G) -> RunnableAndThen<G, Self>
    where
        Self: Sized,
        G: ThrowingRunnable<E>,
    {
        RunnableAndThen {
            first: before,
            second: self,
        }
    }

    /// Returns the ordinary-callback view of this action.
    fn unthrow(mut self) -> impl FnMut() -> Result<(), Exception>
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move || self.run()
    }

    /// Returns a plain `FnMut()` that raises failures by unwinding.
    #[cfg(feature = "unchecked")]
    fn unchecked(mut self) -> impl FnMut()
    where
        Self: Sized,
        E: Into<Exception>,
    {
        move || sneaky_unwrap(self.run_throwing())
    }
}

impl<E, A> ThrowingRunnable<E> for &mut A
where
    A: ThrowingRunnable<E> + ?Sized,
{
    fn run_throwing(&mut self) -> Result<(), E> {
        (**self).run_throwing()
    }
}

/// A [`ThrowingRunnable`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct Runnable<F> {
    action: F,
}

impl<F> Runnable<F> {
    /// Creates an action from a closure returning `Result<(), E>`.
    #[inline]
    pub const fn new<E>(action: F) -> Self
    where
        F: FnMut() -> Result<(), E>,
    {
        Self { action }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.action
    }
}

impl Runnable<()> {
    /// Wraps an infallible closure.
    pub fn wrap<E, P>(mut plain: P) -> Runnable<impl FnMut() -> Result<(), E>>
    where
        P: FnMut(),
    {
        Runnable::new(move || {
            plain();
            Ok::<(), E>(())
        })
    }

    /// Wraps an optional infallible closure.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::MissingArgument`] if `plain` is `None`.
    pub fn try_wrap<E, P>(
        plain: Option<P>,
    ) -> Result<Runnable<impl FnMut() -> Result<(), E>>, UsageError>
    where
        P: FnMut(),
    {
        require(plain, "runnable").map(Self::wrap::<E, P>)
    }
}

impl<E, F> ThrowingRunnable<E> for Runnable<F>
where
    F: FnMut() -> Result<(), E>,
{
    #[inline]
    fn run_throwing(&mut self) -> Result<(), E> {
        (self.action)()
    }
}

/// Creates a [`Runnable`] from a closure returning `Result<(), E>`.
#[inline]
pub const fn runnable<E, F>(action: F) -> Runnable<F>
where
    F: FnMut() -> Result<(), E>,
{
    Runnable::new(action)
}

/// Two actions run in sequence, see [`ThrowingRunnable::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct RunnableAndThen<A, B> {
    first: A,
    second: B,
}

impl<E, A, B> ThrowingRunnable<E> for RunnableAndThen<A, B>
where
    A: ThrowingRunnable<E>,
    B: ThrowingRunnable<E>,
{
    fn run_throwing(&mut self) -> Result<(), E> {
        self.first.run_throwing()?;
        self.second.run_throwing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::fmt;

    #[derive(Debug, PartialEq, Eq)]
    struct Interrupted;

    impl fmt::Display for Interrupted {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("interrupted")
        }
    }

    impl std::error::Error for Interrupted {}

    #[rstest]
    fn test_run_performs_action() {
        let mut builder = String::from("first");
        {
            let mut append = Runnable::new(|| {
                builder.push_str("second");
                Ok::<_, Interrupted>(())
            });
            assert!(append.run().is_ok());
        }
        assert_eq!(builder, "firstsecond");
    }

    #[rstest]
    #[case(true, 1)]
    #[case(false, 0)]
    fn test_and_then_runs_second_only_after_success(
        #[case] first_succeeds: bool,
        #[case] expected_calls: u32,
    ) {
        let calls = Cell::new(0);
        let first = Runnable::new(|| {
            if first_succeeds {
                Ok(())
            } else {
                Err(Interrupted)
            }
        });
        let second = Runnable::new(|| {
            calls.set(calls.get() + 1);
            Ok::<_, Interrupted>(())
        });
        let mut sequence = first.and_then(second);

        assert_eq!(sequence.run_throwing().is_ok(), first_succeeds);
        assert_eq!(calls.get(), expected_calls);
    }

    #[rstest]
    fn test_unthrow_raises_same_error() {
        let mut view = Runnable::new(|| Err::<(), _>(Interrupted)).unthrow();
        assert!(view().unwrap_err().is::<Interrupted>());
    }

    #[rstest]
    fn test_try_wrap_reports_missing_runnable() {
        let missing: Option<fn()> = None;
        assert_eq!(
            Runnable::try_wrap::<Interrupted, _>(missing).err(),
            Some(UsageError::MissingArgument {
                argument: "runnable"
            })
        );
    }

    #[rstest]
    fn test_try_wrap_runs_present_action() {
        let calls = Cell::new(0);
        let mut action = Runnable::try_wrap::<Interrupted, _>(Some(|| calls.set(calls.get() + 1)))
            .expect("action is present");

        assert_eq!(action.run_throwing(), Ok(()));
        assert_eq!(calls.get(), 1);
    }
}
