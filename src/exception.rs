//! Error types shared by every adapter.
//!
//! - [`Exception`]: the erased error every exposed entry point reports.
//!   It owns the original error and keeps its runtime type, so handlers can
//!   still match on it with [`Exception::is`] or [`Exception::downcast_ref`].
//! - [`UsageError`]: reported immediately when a required callback is absent.
//!
//! # Examples
//!
//! ```rust
//! use throwing::Exception;
//!
//! #[derive(Debug, PartialEq)]
//! struct Timeout(u32);
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(formatter, "timed out after {}ms", self.0)
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! let exception = Exception::from(Timeout(250));
//! assert!(exception.is::<Timeout>());
//! assert_eq!(exception.downcast_ref::<Timeout>(), Some(&Timeout(250)));
//! assert_eq!(exception.to_string(), "timed out after 250ms");
//! ```

use std::error::Error;
use std::fmt;

/// The boxed form of an erased error.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error whose static type has been erased.
///
/// `Exception` is what an adapter's exposed entry point returns when the
/// declared-throwing entry point fails. The original error is kept boxed and
/// unchanged: its runtime type survives, only the static type is widened.
///
/// `Exception` intentionally does not implement [`std::error::Error`]. This
/// keeps the blanket `From<E: Error>` conversion coherent, so `?` widens any
/// error into an `Exception`.
///
/// An exception may carry *suppressed* exceptions: errors that happened while
/// handling this one and were not propagated on their own. The fallback
/// combinators in [`try_catch`](crate::try_catch) use them to keep the
/// primary failure around when the fallback fails too.
pub struct Exception {
    inner: BoxError,
    suppressed: Vec<Self>,
}

impl Exception {
    /// Wraps an error, erasing its static type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::Exception;
    ///
    /// let exception = Exception::new(std::fmt::Error);
    /// assert!(exception.is::<std::fmt::Error>());
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Wraps an already boxed error without boxing it again.
    pub fn from_boxed(error: BoxError) -> Self {
        Self {
            inner: error,
            suppressed: Vec::new(),
        }
    }

    /// Creates an exception carrying only a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::Exception;
    ///
    /// let exception = Exception::msg("connection reset");
    /// assert_eq!(exception.to_string(), "connection reset");
    /// ```
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(MessageError(message))
    }

    /// Returns `true` if the original error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Returns a reference to the original error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns a mutable reference to the original error if it is of type `E`.
    pub fn downcast_mut<E>(&mut self) -> Option<&mut E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_mut::<E>()
    }

    /// Recovers the original error by value.
    ///
    /// # Errors
    ///
    /// Returns the exception unchanged (suppressed exceptions included) if
    /// the original error is not of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use throwing::Exception;
    ///
    /// let exception = Exception::new(std::fmt::Error);
    /// let exception = exception.downcast::<std::io::Error>().unwrap_err();
    /// assert!(exception.downcast::<std::fmt::Error>().is_ok());
    /// ```
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Error + 'static,
    {
        let Self { inner, suppressed } = self;
        inner
            .downcast::<E>()
            .map(|error| *error)
            .map_err(|inner| Self { inner, suppressed })
    }

    /// Returns the exceptions suppressed while handling this one, oldest first.
    pub fn suppressed(&self) -> &[Self] {
        &self.suppressed
    }

    /// Records an exception that was suppressed in favour of this one.
    pub fn add_suppressed(&mut self, exception: Self) {
        self.suppressed.push(exception);
    }

    /// Builder form of [`Exception::add_suppressed`].
    #[must_use]
    pub fn with_suppressed(mut self, exception: Self) -> Self {
        self.add_suppressed(exception);
        self
    }

    /// Returns the original error as a trait object.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Unwraps the original boxed error, dropping suppressed exceptions.
    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

impl<E> From<E> for Exception
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Exception> for BoxError {
    fn from(exception: Exception) -> Self {
        exception.into_inner()
    }
}

impl AsRef<dyn Error + Send + Sync> for Exception {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

impl fmt::Display for Exception {
    /// The alternate form (`{:#}`) lists suppressed exceptions as well.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.inner)?;
        if formatter.alternate() {
            for exception in &self.suppressed {
                write!(formatter, " (suppressed: {exception:#})")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exception")
            .field("error", &self.inner)
            .field("suppressed", &self.suppressed)
            .finish()
    }
}

struct MessageError<M>(M);

impl<M: fmt::Debug> fmt::Debug for MessageError<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl<M: fmt::Display> fmt::Display for MessageError<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl<M: fmt::Display + fmt::Debug> Error for MessageError<M> {}

/// Represents a misuse of a combinator, reported at call time.
///
/// Closures cannot be null in Rust, so the only way to omit a required
/// callback is to pass `None` where an `Option` is accepted (see
/// [`require`]).
///
/// # Examples
///
/// ```rust
/// use throwing::UsageError;
///
/// let error = UsageError::MissingArgument { argument: "consumer" };
/// assert_eq!(format!("{error}"), "missing required argument `consumer`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageError {
    /// A required callback was absent.
    MissingArgument {
        /// The name of the missing argument.
        argument: &'static str,
    },
}

impl fmt::Display for UsageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { argument } => {
                write!(formatter, "missing required argument `{argument}`")
            }
        }
    }
}

impl Error for UsageError {}

/// Unwraps a required argument.
///
/// # Errors
///
/// Returns [`UsageError::MissingArgument`] naming `argument` if `value` is
/// `None`.
///
/// # Examples
///
/// ```rust
/// use throwing::{UsageError, require};
///
/// assert_eq!(require(Some(1), "first"), Ok(1));
/// assert_eq!(
///     require::<i32>(None, "second"),
///     Err(UsageError::MissingArgument { argument: "second" })
/// );
/// ```
pub fn require<T>(value: Option<T>, argument: &'static str) -> Result<T, UsageError> {
    value.ok_or(UsageError::MissingArgument { argument })
}
