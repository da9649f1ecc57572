//! # throwing
//!
//! Adapters that let fallible closures pass through call sites written for
//! ordinary callbacks.
//!
//! ## Overview
//!
//! A fallible closure has a concrete error type, and every call site that
//! accepts it would otherwise have to name that type. This library wraps
//! such closures in adapters with two entry points: a declared-throwing one
//! that returns the closure's own error, and an exposed one that returns the
//! same error widened into a single erased type, [`Exception`]. The error's
//! runtime identity survives the widening and can be recovered by
//! downcasting.
//!
//! - **Exceptions**: [`Exception`], suppressed causes, and [`UsageError`]
//! - **Rethrow**: [`sneaky::sneaky_throw`] and the unwinding escape hatch
//! - **Adapters**: one trait and wrapper per callback shape, with combinators
//! - **Helpers**: fluent mutation, try/catch as an expression, batch application
//!
//! ## Feature Flags
//!
//! - `adapter`: The adapter family (enabled by default)
//! - `helpers`: The [`value`], `try_catch` and `batch` helpers (enabled by default)
//! - `unchecked`: Unwinding escape hatch for signatures that cannot return `Result` (enabled by default)
//! - `tracing`: Trace events on recovery paths
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use throwing::prelude::*;
//!
//! #[derive(Debug)]
//! struct Rejected;
//!
//! impl std::fmt::Display for Rejected {
//!     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         formatter.write_str("rejected")
//!     }
//! }
//!
//! impl std::error::Error for Rejected {}
//!
//! fn run_twice(mut job: impl ThrowingRunnable<Rejected>) -> Result<(), Exception> {
//!     job.run()?;
//!     job.run()
//! }
//!
//! let mut remaining = 1;
//! let error = run_twice(Runnable::new(|| {
//!     if remaining == 0 {
//!         return Err(Rejected);
//!     }
//!     remaining -= 1;
//!     Ok(())
//! }))
//! .unwrap_err();
//!
//! assert!(error.is::<Rejected>());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use throwing::prelude::*;
/// ```
pub mod prelude {
    pub use crate::exception::{Exception, UsageError};

    #[cfg(feature = "adapter")]
    pub use crate::adapter::{
        BiConsumer, BiFunction, BiPredicate, Consumer, Function, Predicate, Runnable, Supplier,
        ThrowingBiConsumer, ThrowingBiFunction, ThrowingBiPredicate, ThrowingBinaryOperator,
        ThrowingConsumer, ThrowingFunction, ThrowingPredicate, ThrowingRunnable, ThrowingSupplier,
        ThrowingUnaryOperator,
    };

    #[cfg(feature = "helpers")]
    pub use crate::batch::*;

    #[cfg(feature = "helpers")]
    pub use crate::try_catch::*;
}

pub mod exception;

pub mod sneaky;

#[cfg(feature = "adapter")]
pub mod adapter;

#[cfg(feature = "helpers")]
pub mod value;

#[cfg(feature = "helpers")]
pub mod try_catch;

#[cfg(feature = "helpers")]
pub mod batch;

pub use exception::{BoxError, Exception, UsageError, require};
