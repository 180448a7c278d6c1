//! Router core module - hot path for path resolution.
//!
//! Builds the route trie once from a complete pattern set, then serves
//! read-only match lookups. No mutation occurs after construction, so a
//! built router can back any number of dispatches.

// Deny heap allocations in the hot path
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::trie::{split_path, CaptureVec, CompiledRoute, TrieNode};

/// Maximum number of path parameters before heap allocation.
/// Most route sets bind ≤4 parameters per pattern (e.g. `/users/:id/posts/:post_id`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the hot path.
/// Uses `SmallVec` to avoid heap allocation for routes with ≤8 params.
///
/// Param names use `Arc<str>` instead of `String` because:
/// - Names come from the static route trie (known at build time)
/// - `Arc::clone()` is O(1) atomic increment vs O(n) string copy
/// - Values remain `String` as they're per-dispatch text from the path
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully resolving a path against the route trie
///
/// Borrows the registered element and compiled route from the router, so a
/// match is only valid while the router is alive; captured parameter text is
/// owned.
#[derive(Debug)]
pub struct RouteMatch<'r, T> {
    /// The element registered under the matched pattern
    pub element: &'r T,
    /// The compiled route that matched, kept for pattern rendering
    pub route: &'r CompiledRoute,
    /// Parameter names zipped with wildcard-captured text, in positional
    /// order (stack-allocated for ≤8 params)
    pub params: ParamVec,
}

impl<T> RouteMatch<'_, T> {
    /// Get a captured parameter by name
    ///
    /// Uses "last write wins" semantics: if the same name is bound at
    /// different path depths (e.g. `/org/:id/user/:id`), returns the last
    /// occurrence.
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert params to a `HashMap` for compatibility with map-based callers
    /// Note: This allocates - use `get_param()` in hot paths instead
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Trie-backed path router
///
/// Built once from a complete set of (pattern, element) pairs and read-only
/// afterwards. Resolution walks the trie segment by segment, preferring
/// literal transitions over wildcard ones, so lookup is O(k) in path depth
/// regardless of how many routes are registered.
pub struct Router<T> {
    /// Root node of the route trie
    root: TrieNode<T>,
    /// Normalized patterns in registration order, for debugging and metrics
    patterns: Vec<String>,
}

impl<T> Router<T> {
    /// Build a router from (pattern, element) pairs.
    ///
    /// Each pattern is compiled (§ pattern syntax: `/`-delimited fragments,
    /// `:name` wildcards, empty fragments ignored, empty pattern = root) and
    /// inserted into the trie. Registering the exact same pattern twice keeps
    /// the later element; distinct patterns never collide.
    ///
    /// # Example
    ///
    /// ```
    /// use waypoint::Router;
    ///
    /// let router = Router::new(vec![
    ///     ("/users".to_string(), "list_users"),
    ///     ("/users/:id".to_string(), "get_user"),
    /// ]);
    /// assert!(router.route("/users/42").is_some());
    /// ```
    #[must_use]
    pub fn new(routes: impl IntoIterator<Item = (String, T)>) -> Self {
        let mut root = TrieNode::new();
        let mut patterns = Vec::new();
        for (pattern, element) in routes {
            let route = CompiledRoute::compile(&pattern);
            let normalized = route.pattern();
            if !patterns.contains(&normalized) {
                patterns.push(normalized);
            }
            root.insert(route, element);
        }

        let patterns_summary: Vec<&String> = patterns.iter().take(10).collect();
        info!(
            route_count = patterns.len(),
            patterns_summary = ?patterns_summary,
            "Routing table loaded"
        );

        Self { root, patterns }
    }

    /// Resolve a raw path against the route trie
    ///
    /// The path is segmented exactly like a pattern (slash-split, trimmed,
    /// empties dropped) but no wildcard syntax is interpreted: every input
    /// segment is raw text. On success the route's parameter names are zipped
    /// with the wildcard-captured text in positional order.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - element, matched route, and captured params
    /// * `None` - no terminal reached (unknown segment, or the path is only
    ///   an internal prefix of registered routes)
    #[must_use]
    pub fn route(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        debug!(path = %path, "Route match attempt");

        let segments = split_path(path);
        let mut captured = CaptureVec::new();
        match self.root.search(&segments, &mut captured) {
            Some(terminal) => {
                let params: ParamVec = terminal
                    .route
                    .param_names
                    .iter()
                    .map(Arc::clone)
                    .zip(captured.iter().map(|text| (*text).to_string()))
                    .collect();
                info!(
                    path = %path,
                    pattern = %terminal.route,
                    params = ?params,
                    "Route matched"
                );
                Some(RouteMatch {
                    element: &terminal.element,
                    route: &terminal.route,
                    params,
                })
            }
            None => {
                warn!(path = %path, "No route matched");
                None
            }
        }
    }

    /// Number of distinct registered patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if no routes were registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All registered patterns in normalized form, in registration order
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Print all registered routes to stdout
    ///
    /// Useful for verifying that a route set loaded the way you expect.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.patterns.len());
        for pattern in &self.patterns {
            println!("[route] {pattern}");
        }
    }
}
