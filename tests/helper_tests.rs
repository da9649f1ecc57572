//! Integration tests for the composition helpers.
//!
//! - `value`: fluent mutation and transforms
//! - `try_catch`: rethrowing and fallback combinators
//! - `batch`: ordered application with early exit

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;

use rstest::rstest;
use throwing::adapter::{Consumer, Function, Predicate, Runnable, Supplier, ThrowingFunction};
use throwing::batch::{do_for_each, with_each};
use throwing::try_catch::{try_catch, try_catch_fallback, try_or_else};
use throwing::value::{apply, do_if, map, with};
use throwing::{Exception, UsageError};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
struct ServiceDown(&'static str);

impl fmt::Display for ServiceDown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} is down", self.0)
    }
}

impl std::error::Error for ServiceDown {}

#[derive(Debug, Default, PartialEq)]
struct Request {
    method: String,
    headers: BTreeMap<String, String>,
}

// =============================================================================
// Value Tests
// =============================================================================

#[rstest]
fn test_with_builds_value_in_one_expression() {
    let request = with(
        Request::default(),
        Consumer::new(|request: &mut Request| {
            request.method = String::from("GET");
            request.headers.insert(String::from("Accept"), String::from("*/*"));
            Ok::<_, ServiceDown>(())
        }),
    )
    .unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.headers.len(), 1);
}

#[rstest]
fn test_with_accepts_plain_closure() {
    let builder = with(
        String::from("first"),
        Consumer::wrap::<Infallible, _>(|builder: &mut String| builder.push_str("second")),
    );

    assert_eq!(builder.ok().as_deref(), Some("firstsecond"));
}

#[rstest]
fn test_apply_composes_with_map() {
    let normalize = apply(Consumer::new(|text: &mut String| {
        text.make_ascii_lowercase();
        Ok::<_, ServiceDown>(())
    }));
    let measure = Function::new(|text: String| Ok::<_, ServiceDown>(text.len()));

    assert_eq!(map(String::from("MiXeD"), normalize.and_then(measure)), Ok(5));
}

#[rstest]
fn test_do_if_leaves_value_when_condition_fails() {
    let result = do_if(
        Supplier::new(|| Ok::<_, ServiceDown>(vec![1, 2])),
        Predicate::new(|values: &Vec<i32>| Ok(values.is_empty())),
        Consumer::new(|values: &mut Vec<i32>| {
            values.clear();
            Ok(())
        }),
    );
    assert_eq!(result, Ok(vec![1, 2]));
}

#[rstest]
fn test_missing_callback_is_usage_error() {
    let missing: Option<fn(&mut Vec<i32>)> = None;
    let error = Consumer::try_wrap::<ServiceDown, _>(missing).err();

    assert_eq!(error, Some(UsageError::MissingArgument { argument: "consumer" }));
}

// =============================================================================
// TryCatch Tests
// =============================================================================

#[rstest]
fn test_failing_primary_returns_expected_fallback() {
    let result = try_or_else(
        Supplier::new(|| Err::<String, _>(ServiceDown("primary"))),
        Supplier::new(|| Ok::<_, ServiceDown>(String::from("expected"))),
    );
    assert_eq!(result.ok().as_deref(), Some("expected"));
}

#[rstest]
#[case("cache", "cache is down")]
#[case("database", "database is down")]
fn test_fallback_function_receives_caught_error(#[case] service: &'static str, #[case] expected: &str) {
    let result = try_catch_fallback(
        Supplier::new(move || Err::<String, _>(ServiceDown(service))),
        Function::new(|error: &Exception| Ok::<_, ServiceDown>(error.to_string())),
    );
    assert_eq!(result.ok().as_deref(), Some(expected));
}

#[rstest]
fn test_failing_fallback_reports_both_errors() {
    let error = try_or_else(
        Supplier::new(|| Err::<u8, _>(ServiceDown("primary"))),
        Supplier::new(|| Err::<u8, _>(ServiceDown("replica"))),
    )
    .unwrap_err();

    assert_eq!(error.downcast_ref::<ServiceDown>(), Some(&ServiceDown("replica")));
    assert_eq!(format!("{error:#}"), "replica is down (suppressed: primary is down)");
}

#[rstest]
fn test_try_catch_routes_error_to_handler() {
    let handled = RefCell::new(Vec::new());
    let result = try_catch(
        Runnable::new(|| Err::<(), _>(ServiceDown("queue"))),
        Consumer::new(|error: &Exception| {
            handled.borrow_mut().push(error.to_string());
            Ok::<_, ServiceDown>(())
        }),
    );

    assert!(result.is_ok());
    assert_eq!(*handled.borrow(), ["queue is down"]);
}

#[rstest]
fn test_plain_fallback_receives_caught_error() {
    let result = try_catch_fallback(
        Supplier::new(|| Err::<usize, _>(ServiceDown("index"))),
        Function::wrap::<Infallible, _>(|error: &Exception| error.to_string().len()),
    );
    assert_eq!(result.ok(), Some("index is down".len()));
}

#[rstest]
fn test_plain_handler_receives_caught_error() {
    let handled = RefCell::new(Vec::new());
    let result = try_catch(
        Runnable::new(|| Err::<(), _>(ServiceDown("mailer"))),
        Consumer::wrap::<Infallible, _>(|error: &Exception| handled.borrow_mut().push(error.to_string())),
    );

    assert!(result.is_ok());
    assert_eq!(*handled.borrow(), ["mailer is down"]);
}

// =============================================================================
// Batch Tests
// =============================================================================

#[rstest]
fn test_batch_accumulates_in_order() {
    let mut buffer = String::new();
    with_each(
        ['t', 'e', 's', 't'],
        Consumer::new(|character: char| {
            buffer.push(character);
            Ok::<_, ServiceDown>(())
        }),
    )
    .unwrap();

    assert_eq!(buffer, "test");
}

#[rstest]
fn test_batch_stops_at_first_failure() {
    let visited = RefCell::new(Vec::new());
    let result = do_for_each(
        Consumer::new(|name: &'static str| {
            visited.borrow_mut().push(name);
            if name == "b" { Err(ServiceDown(name)) } else { Ok(()) }
        }),
        ["a", "b", "c"],
    );

    assert_eq!(result, Err(ServiceDown("b")));
    assert_eq!(*visited.borrow(), ["a", "b"]);
}
