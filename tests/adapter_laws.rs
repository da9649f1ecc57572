//! Property-based tests for adapter laws.
//!
//! - **Transparency**: the exposed entry point returns the success value
//!   unchanged, and its error downcasts to the original error and payload.
//! - **Sequencing**: `a.and_then(b)` never runs `b` after `a` fails, and runs
//!   it exactly once with `a`'s result otherwise.
//! - **Short circuit**: `p.and(q)` skips `q` when `p` is false; `p.or(q)`
//!   skips `q` when `p` is true.
//! - **Boolean algebra**: double negation, and De Morgan's laws, hold
//!   whenever every operand succeeds.

use std::cell::Cell;
use std::fmt;

use proptest::prelude::*;
use throwing::adapter::{
    Function, Predicate, ThrowingFunction, ThrowingPredicate, Supplier, ThrowingSupplier,
};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rejected(i64);

impl fmt::Display for Rejected {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "rejected {}", self.0)
    }
}

impl std::error::Error for Rejected {}

/// Fails on multiples of `divisor`, doubles everything else.
fn double_unless_multiple_of(divisor: i64) -> Function<impl FnMut(i64) -> Result<i64, Rejected>> {
    Function::new(move |value: i64| {
        if value % divisor == 0 {
            Err(Rejected(value))
        } else {
            Ok(value.wrapping_mul(2))
        }
    })
}

fn threshold(limit: i64) -> Predicate<impl FnMut(&i64) -> Result<bool, Rejected> + Copy> {
    Predicate::new(move |value: &i64| Ok(*value > limit))
}

// =============================================================================
// Transparency Laws
// =============================================================================

proptest! {
    /// The exposed entry point agrees with the declared-throwing one.
    #[test]
    fn prop_function_transparency(value in any::<i64>(), divisor in 1i64..10) {
        let expected = double_unless_multiple_of(divisor).apply_throwing(value);
        let exposed = double_unless_multiple_of(divisor).apply(value);

        match expected {
            Ok(doubled) => prop_assert_eq!(exposed.ok(), Some(doubled)),
            Err(error) => prop_assert_eq!(
                exposed.unwrap_err().downcast::<Rejected>().ok(),
                Some(error)
            ),
        }
    }

    /// The unthrown view agrees with the exposed entry point.
    #[test]
    fn prop_supplier_unthrow_transparency(value in any::<i64>(), fails in any::<bool>()) {
        let produce = move || if fails { Err(Rejected(value)) } else { Ok(value) };
        let mut view = Supplier::new(produce).unthrow();
        let exposed = Supplier::new(produce).get();

        prop_assert_eq!(
            view().map_err(|error| error.downcast::<Rejected>().ok()),
            exposed.map_err(|error| error.downcast::<Rejected>().ok())
        );
    }
}

// =============================================================================
// Sequencing Laws
// =============================================================================

proptest! {
    /// `after` runs exactly once after success and never after failure.
    #[test]
    fn prop_and_then_runs_after_only_on_success(value in any::<i64>(), divisor in 1i64..10) {
        let calls = Cell::new(0);
        let after = Function::new(|doubled: i64| {
            calls.set(calls.get() + 1);
            Ok::<_, Rejected>(doubled.wrapping_add(1))
        });
        let result = double_unless_multiple_of(divisor).and_then(after).apply_throwing(value);

        if value % divisor == 0 {
            prop_assert_eq!(result, Err(Rejected(value)));
            prop_assert_eq!(calls.get(), 0);
        } else {
            prop_assert_eq!(result, Ok(value.wrapping_mul(2).wrapping_add(1)));
            prop_assert_eq!(calls.get(), 1);
        }
    }

    /// `compose` is `and_then` with the operands swapped.
    #[test]
    fn prop_compose_matches_and_then(value in any::<i64>(), divisor in 1i64..10) {
        let increment = || Function::new(|value: i64| Ok::<_, Rejected>(value.wrapping_add(1)));

        let composed = double_unless_multiple_of(divisor).compose(increment()).apply_throwing(value);
        let chained = increment().and_then(double_unless_multiple_of(divisor)).apply_throwing(value);

        prop_assert_eq!(composed, chained);
    }
}

// =============================================================================
// Predicate Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_and_skips_second_when_first_is_false(value in any::<i64>(), limit in any::<i64>()) {
        let calls = Cell::new(0);
        let second = Predicate::new(|_: &i64| {
            calls.set(calls.get() + 1);
            Ok::<_, Rejected>(true)
        });
        let result = threshold(limit).and(second).test_throwing(&value);

        prop_assert_eq!(result, Ok(value > limit));
        prop_assert_eq!(calls.get(), u32::from(value > limit));
    }

    #[test]
    fn prop_or_skips_second_when_first_is_true(value in any::<i64>(), limit in any::<i64>()) {
        let calls = Cell::new(0);
        let second = Predicate::new(|_: &i64| {
            calls.set(calls.get() + 1);
            Ok::<_, Rejected>(false)
        });
        let result = threshold(limit).or(second).test_throwing(&value);

        prop_assert_eq!(result, Ok(value > limit));
        prop_assert_eq!(calls.get(), u32::from(value <= limit));
    }

    #[test]
    fn prop_double_negation(value in any::<i64>(), limit in any::<i64>()) {
        let direct = threshold(limit).test_throwing(&value);
        let doubled = threshold(limit).negate().negate().test_throwing(&value);
        prop_assert_eq!(direct, doubled);
    }

    #[test]
    fn prop_de_morgan(value in any::<i64>(), low in any::<i64>(), high in any::<i64>()) {
        let left = threshold(low).and(threshold(high)).negate().test_throwing(&value);
        let right = threshold(low).negate().or(threshold(high).negate()).test_throwing(&value);
        prop_assert_eq!(left, right);

        let left = threshold(low).or(threshold(high)).negate().test_throwing(&value);
        let right = threshold(low).negate().and(threshold(high).negate()).test_throwing(&value);
        prop_assert_eq!(left, right);
    }
}
