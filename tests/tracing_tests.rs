//! Tests for the `tracing` events emitted on recovery paths.
//!
//! Each test installs a thread-local subscriber that counts events, so
//! tests running in parallel do not see each other's events.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use throwing::Exception;
use throwing::adapter::{Consumer, Function, Runnable, Supplier};
use throwing::sneaky::{catch_unchecked, throw_unchecked};
use throwing::try_catch::{rethrow_on_exception, try_catch, try_catch_fallback, try_or_else};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("unavailable")
    }
}

impl std::error::Error for Unavailable {}

#[derive(Clone, Default)]
struct EventCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, _event: &Event<'_>, _context: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn count_events(operation: impl FnOnce()) -> usize {
    let counter = EventCounter::default();
    let subscriber = Registry::default().with(counter.clone());
    tracing::subscriber::with_default(subscriber, operation);
    counter.0.load(Ordering::SeqCst)
}

// =============================================================================
// Recovery Tests
// =============================================================================

#[rstest]
fn test_try_or_else_traces_recovery() {
    let events = count_events(|| {
        let value = try_or_else(
            Supplier::new(|| Err::<i32, _>(Unavailable)),
            Supplier::new(|| Ok::<_, Unavailable>(1)),
        );
        assert_eq!(value.ok(), Some(1));
    });
    assert_eq!(events, 1);
}

#[rstest]
fn test_try_catch_fallback_traces_recovery() {
    let events = count_events(|| {
        let value = try_catch_fallback(
            Supplier::new(|| Err::<i32, _>(Unavailable)),
            Function::new(|_: &Exception| Ok::<_, Unavailable>(0)),
        );
        assert_eq!(value.ok(), Some(0));
    });
    assert_eq!(events, 1);
}

#[rstest]
fn test_try_catch_traces_recovery() {
    let events = count_events(|| {
        let result = try_catch(
            Runnable::new(|| Err::<(), _>(Unavailable)),
            Consumer::new(|_: &Exception| Ok::<_, Unavailable>(())),
        );
        assert!(result.is_ok());
    });
    assert_eq!(events, 1);
}

#[rstest]
fn test_success_and_plain_rethrow_are_silent() {
    let events = count_events(|| {
        let value = try_or_else(
            Supplier::new(|| Ok::<_, Unavailable>(1)),
            Supplier::new(|| Ok::<_, Unavailable>(2)),
        );
        assert_eq!(value.ok(), Some(1));

        let error = rethrow_on_exception(Supplier::new(|| Err::<i32, _>(Unavailable)));
        assert!(error.unwrap_err().is::<Unavailable>());
    });
    assert_eq!(events, 0);
}

// =============================================================================
// Unchecked Tests
// =============================================================================

#[rstest]
fn test_catch_unchecked_traces_caught_throw() {
    let events = count_events(|| {
        let result = catch_unchecked(|| -> i32 { throw_unchecked(Unavailable) });
        assert!(result.unwrap_err().is::<Unavailable>());
    });
    assert_eq!(events, 1);
}
