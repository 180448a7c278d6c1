//! Tests for the handler dispatcher
//!
//! # Test Coverage
//!
//! - Success handler invocation with element and captured params
//! - Failure handler invocation with the original raw path
//! - Silent-drop policy when no failure handler is bound
//! - Fail-fast panic when a matched dispatch has no success handler
//! - Handler rebinding taking effect from the next dispatch
//! - Fluent chaining of the binding methods

use std::cell::RefCell;
use std::rc::Rc;

use waypoint::{Dispatcher, Router};

use tracing_util::TestTracing;

type Dispatched = Rc<RefCell<Vec<(String, Vec<(String, String)>)>>>;

fn example_dispatcher() -> (Dispatcher<&'static str>, Dispatched, Rc<RefCell<Vec<String>>>) {
    let router = Router::new(vec![
        ("/".to_string(), "home"),
        ("/users/:id".to_string(), "get_user"),
    ]);
    let dispatched: Dispatched = Rc::new(RefCell::new(Vec::new()));
    let failed: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new(router);
    let sink = Rc::clone(&dispatched);
    let errors = Rc::clone(&failed);
    dispatcher
        .on_route(move |element: &&str, params| {
            let params = params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            sink.borrow_mut().push(((*element).to_string(), params));
        })
        .on_route_error(move |path| {
            errors.borrow_mut().push(path.to_string());
        });

    (dispatcher, dispatched, failed)
}

#[test]
fn test_go_invokes_success_handler() {
    let _trace = TestTracing::init();
    let (dispatcher, dispatched, failed) = example_dispatcher();

    dispatcher.go("/users/42");

    let calls = dispatched.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "get_user");
    assert_eq!(calls[0].1, vec![("id".to_string(), "42".to_string())]);
    assert!(failed.borrow().is_empty());
}

#[test]
fn test_go_invokes_failure_handler_with_raw_path() {
    let _trace = TestTracing::init();
    let (dispatcher, dispatched, failed) = example_dispatcher();

    dispatcher.go("/no/such/route");

    assert!(dispatched.borrow().is_empty());
    // The failure handler receives the original input, not a normalized form
    assert_eq!(failed.borrow().as_slice(), &["/no/such/route".to_string()]);
}

#[test]
fn test_unmatched_dispatch_without_failure_handler_is_dropped() {
    let _trace = TestTracing::init();
    let router = Router::new(vec![("/only".to_string(), "only")]);
    let mut dispatcher = Dispatcher::new(router);
    dispatcher.on_route(|_element: &&str, _params| {});

    // No failure handler bound: the miss is silently ignored
    dispatcher.go("/missing");
}

#[test]
#[should_panic(expected = "no success handler bound")]
fn test_matched_dispatch_without_success_handler_panics() {
    let router = Router::new(vec![("/users/:id".to_string(), "get_user")]);
    let dispatcher = Dispatcher::new(router);
    dispatcher.go("/users/42");
}

#[test]
fn test_miss_without_success_handler_does_not_panic() {
    let _trace = TestTracing::init();
    let router = Router::new(vec![("/only".to_string(), "only")]);
    let failed: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new(router);
    let errors = Rc::clone(&failed);
    dispatcher.on_route_error(move |path| errors.borrow_mut().push(path.to_string()));

    // The success handler precondition only applies to matched dispatches
    dispatcher.go("/missing");
    assert_eq!(failed.borrow().len(), 1);
}

#[test]
fn test_rebinding_takes_effect_on_next_dispatch() {
    let _trace = TestTracing::init();
    let router = Router::new(vec![("/page".to_string(), "page")]);
    let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new(router);
    let first = Rc::clone(&seen);
    dispatcher.on_route(move |_element: &&str, _params| first.borrow_mut().push("first"));
    dispatcher.go("/page");

    let second = Rc::clone(&seen);
    dispatcher.on_route(move |_element: &&str, _params| second.borrow_mut().push("second"));
    dispatcher.go("/page");

    // Rebinding never replays the earlier dispatch
    assert_eq!(seen.borrow().as_slice(), &["first", "second"]);
}

#[test]
fn test_router_accessor() {
    let (dispatcher, _dispatched, _failed) = example_dispatcher();
    assert_eq!(dispatcher.router().len(), 2);
}
