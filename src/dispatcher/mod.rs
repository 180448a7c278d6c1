//! # Dispatcher Module
//!
//! Handler dispatch for waypoint. The dispatcher owns a built
//! [`Router`](crate::router::Router) plus two rebindable handler slots: a
//! success handler invoked with `(element, params)` when a dispatched path
//! matches, and an optional failure handler invoked with the original raw
//! path when it does not.
//!
//! ## Dispatch Flow
//!
//! 1. `go(path)` resolves the path against the route trie
//! 2. On a match, the success handler runs with the registered element and
//!    the captured parameters
//! 3. On a miss, the failure handler runs with the raw path if one is bound;
//!    otherwise the dispatch is dropped silently (intentional policy)
//!
//! ## Handler Binding
//!
//! ```rust
//! use waypoint::{Dispatcher, Router};
//!
//! let router = Router::new(vec![("/users/:id".to_string(), "get_user")]);
//! let mut dispatcher = Dispatcher::new(router);
//! dispatcher
//!     .on_route(|element, params| {
//!         println!("{element}: {params:?}");
//!     })
//!     .on_route_error(|path| {
//!         println!("no route for {path}");
//!     });
//!
//! dispatcher.go("/users/42");
//! ```
//!
//! Binding a success handler before the first `go` is a precondition:
//! dispatching a matched path with no success handler bound panics, since it
//! means the router was used before being fully configured. Rebinding either
//! handler takes effect from the next dispatch onward and never replays past
//! dispatches.
//!
//! ## Execution Model
//!
//! Dispatch is synchronous and single-threaded; handlers are plain boxed
//! closures with no `Send` bound. Embedders running on multiple threads must
//! serialize rebinding and dispatch externally.

mod core;

pub use core::{Dispatcher, ErrorHandler, RouteHandler};
