//! Fallible callback adapters.
//!
//! Each callback shape has a trait whose single required method is the
//! declared-throwing entry point, returning the callback's own error type.
//! The trait's exposed entry point runs the same computation and widens the
//! error into an [`Exception`](crate::Exception), so call sites can accept
//! any fallible callback without naming its error type.
//!
//! # Shapes
//!
//! ```text
//! Shape                Trait                   Declared           Exposed
//! procedure, 0 args    ThrowingRunnable        run_throwing       run
//! procedure, 1 arg     ThrowingConsumer        accept_throwing    accept
//! procedure, 2 args    ThrowingBiConsumer      accept_throwing    accept
//! transform, 1 arg     ThrowingFunction        apply_throwing     apply
//! transform, 2 args    ThrowingBiFunction      apply_throwing     apply
//! test, 1 arg          ThrowingPredicate       test_throwing      test
//! test, 2 args         ThrowingBiPredicate     test_throwing      test
//! supply, 0 args       ThrowingSupplier        get_throwing       get
//! ```
//!
//! Every shape has a closure-backed wrapper ([`Function`], [`Consumer`], ...)
//! with `new` for closures returning `Result`, `wrap` for infallible
//! closures, and `try_wrap` for an optional closure. `unthrow` turns any
//! adapter back into a plain closure returning `Result<_, Exception>`.
//!
//! [`Consumer`] and [`Function`] keep the signature their closure is written
//! with. A closure taking `&mut T` or `&T` therefore accepts borrows of any
//! lifetime, which is what `value::with` and the fallbacks in `try_catch`
//! require.
//!
//! # Example
//!
//! ```
//! use throwing::adapter::{Consumer, Function, ThrowingConsumer, ThrowingFunction};
//! use throwing::Exception;
//!
//! let mut builder = String::from("first");
//! let mut append = Consumer::new(|suffix: &str| {
//!     builder.push_str(suffix);
//!     Ok::<_, std::fmt::Error>(())
//! });
//! append.accept("second")?;
//! drop(append);
//! assert_eq!(builder, "firstsecond");
//!
//! let mut parse = Function::new(|text: &str| text.parse::<u8>());
//! assert!(parse.apply("256").unwrap_err().is::<std::num::ParseIntError>());
//! # Ok::<(), Exception>(())
//! ```
//!
//! # Laws
//!
//! For every adapter `a` of any shape:
//!
//! 1. **Transparency**: the exposed entry point yields the same success
//!    value as the declared-throwing one, and its error downcasts to the
//!    original error.
//!    ```text
//!    a.apply(x).map_err(|e| e.downcast::<E>()) == a.apply_throwing(x).map_err(Ok)
//!    ```
//!
//! 2. **Sequencing**: in `a.and_then(b)`, `b` runs only when `a` succeeds,
//!    and an error of `a` is returned unchanged.
//!
//! 3. **Short circuit**: `p.and(q)` does not evaluate `q` when `p` yields
//!    `false`, and `p.or(q)` does not evaluate `q` when `p` yields `true`.

mod bi_consumer;
mod bi_function;
mod bi_predicate;
mod consumer;
mod function;
mod operator;
mod predicate;
mod runnable;
mod supplier;

pub use bi_consumer::{BiConsumer, BiConsumerAndThen, ThrowingBiConsumer, bi_consumer};
pub use bi_function::{BiFunction, BiFunctionAndThen, ThrowingBiFunction, bi_function};
pub use bi_predicate::{
    BiPredicate, BiPredicateAnd, BiPredicateNot, BiPredicateOr, ThrowingBiPredicate, bi_predicate,
};
pub use consumer::{
    Consumer, ConsumerAndThen, ErasedConsumer, ThrowingConsumer, WrappedConsumer, consumer,
};
pub use function::{
    ErasedFunction, Function, FunctionAndThen, ThrowingFunction, WrappedFunction, function,
};
pub use operator::{ThrowingBinaryOperator, ThrowingUnaryOperator, identity, max_by, min_by};
pub use predicate::{
    ErasedPredicate, Predicate, PredicateAnd, PredicateNot, PredicateOr, ThrowingPredicate,
    always_false, always_true, not, predicate,
};
pub use runnable::{Runnable, RunnableAndThen, ThrowingRunnable, runnable};
pub use supplier::{Supplier, SupplierAndThen, ThrowingSupplier, supplier};

// Adapters are exactly as thread-safe as the closures they own.
static_assertions::assert_impl_all!(Function<fn(i32) -> Result<i32, std::fmt::Error>>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Predicate<fn(&str) -> Result<bool, std::fmt::Error>>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Supplier<std::rc::Rc<()>>: Send, Sync);
static_assertions::assert_not_impl_any!(Runnable<std::cell::Cell<u8>>: Sync);
