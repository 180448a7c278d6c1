//! # waypoint
//!
//! **waypoint** is a minimal client-side path router: it maps structured
//! string paths (e.g. `/users/:id`) to registered elements, extracting named
//! parameters from wildcard segments, and dispatches a matching handler when
//! a navigation event occurs.
//!
//! ## Overview
//!
//! The crate is organized into three modules:
//!
//! - **[`router`]** - the matching engine: pattern compilation, the route
//!   trie, and path resolution with positional parameter binding
//! - **[`dispatcher`]** - success/failure handler slots invoked after each
//!   match attempt
//! - **[`navigation`]** - the adapter boundary to the host environment, plus
//!   an in-memory implementation for tests and server-side use
//!
//! ## Pattern Syntax
//!
//! Patterns are `/`-delimited. A segment of the exact form `:name` (one or
//! more word characters) is a wildcard that matches any single raw segment
//! and binds its text to `name`; any other non-empty segment is literal.
//! Empty segments are ignored, so leading, trailing, and duplicate slashes
//! are tolerated, and the empty pattern denotes the root route. Every string
//! is a valid pattern; a malformed-looking fragment such as a lone `:` is
//! simply literal text.
//!
//! ## Matching Semantics
//!
//! Resolution is a deterministic trie walk, linear in path depth: at each
//! node a literal transition is preferred over the wildcard one, so
//! specificity is structural and no route needs priority metadata. There is
//! no backtracking; a dead end fails the match. A path that is only an
//! internal prefix of registered routes (no terminal) is not a match.
//!
//! ## Quick Start
//!
//! ```rust
//! use waypoint::{Dispatcher, Router};
//!
//! let router = Router::new(vec![
//!     ("/".to_string(), "home"),
//!     ("/users/:id".to_string(), "user_page"),
//! ]);
//!
//! let mut dispatcher = Dispatcher::new(router);
//! dispatcher.on_route(|element, params| {
//!     println!("rendering {element} with {params:?}");
//! });
//!
//! dispatcher.go("/users/42");
//! ```
//!
//! ## Execution Model
//!
//! Compilation, trie construction, and matching are pure synchronous
//! computations. The trie is built once from a complete pattern set and is
//! read-only afterwards; handler slots are the only mutable state, and
//! rebinding takes effect from the next dispatch onward. The design assumes
//! cooperative single-threaded execution; multi-threaded embedders must
//! serialize rebinding and dispatch externally.

pub mod dispatcher;
pub mod navigation;
pub mod router;

pub use dispatcher::Dispatcher;
pub use navigation::{attach, MemoryNavigation, NavigationSource};
pub use router::{CompiledRoute, ParamVec, RouteMatch, Router, Segment, MAX_INLINE_PARAMS};
