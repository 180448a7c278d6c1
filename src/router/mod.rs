//! # Router Module
//!
//! Path matching and route resolution for waypoint. Uses a trie keyed by
//! path segment to resolve a runtime path to a registered element in time
//! linear in path depth.
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: At build time, patterns (e.g. `/users/:id`) are
//!    compiled into segment sequences and inserted into a trie; overlapping
//!    prefixes naturally share nodes.
//!
//! 2. **Matching**: For each lookup, the router walks the trie one raw
//!    segment at a time, preferring literal transitions over wildcard ones,
//!    and binds wildcard-captured text to the matched route's parameter
//!    names in positional order.
//!
//! ## Example
//!
//! ```rust
//! use waypoint::router::Router;
//!
//! let router = Router::new(vec![("/users/:id".to_string(), "get_user")]);
//!
//! if let Some(m) = router.route("/users/123") {
//!     assert_eq!(*m.element, "get_user");
//!     assert_eq!(m.get_param("id"), Some("123"));
//! }
//! ```

mod core;
mod trie;

#[cfg(test)]
mod tests;

pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use trie::{CompiledRoute, Segment};
