//! Trie structures for route compilation and path matching
//!
//! This module contains the two build-time halves of the matching engine:
//! the pattern compiler, which turns a pattern string like `/users/:id` into
//! an ordered list of [`Segment`]s plus the parameter names its wildcards
//! bind, and the trie itself, which stores one node per segment so lookup
//! cost is proportional to path depth rather than route count.
//!
//! ## Implementation Details
//!
//! - Literal segments (e.g. `users`) match exactly; wildcard segments
//!   (e.g. `:id`) match any single raw segment
//! - Wildcards carry no identity: all wildcards at the same trie position
//!   share one transition, so each node holds at most one wildcard child
//! - Routes are stored at terminal nodes; a node that exists only as a
//!   shared prefix of longer routes is not a match
//! - Lookup never backtracks: a literal transition is always taken over a
//!   wildcard one, and a dead end fails the whole match

// Deny heap allocations in the hot path
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use super::core::MAX_INLINE_PARAMS;

/// A wildcard pattern fragment: a colon followed by one or more word
/// characters. Anything else (including a lone `:`) is literal text.
static WILDCARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:(\w+)$").expect("wildcard fragment regex is valid"));

/// Raw segment text captured by wildcard transitions during a trie walk,
/// in left-to-right positional order. Borrows from the input path so the
/// walk itself never allocates.
pub(crate) type CaptureVec<'p> = SmallVec<[&'p str; MAX_INLINE_PARAMS]>;

/// One `/`-delimited unit of a compiled route pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Exact text the raw path segment must equal
    Literal(String),
    /// Matches any single raw segment and captures its text.
    /// The bound parameter name lives in [`CompiledRoute::param_names`],
    /// not here: wildcards at the same position are the same transition
    /// regardless of what different routes name the capture.
    Wildcard,
}

/// A pattern string compiled into its segment sequence
///
/// Invariant: `param_names.len()` equals the number of [`Segment::Wildcard`]
/// entries in `segments`, and the i-th wildcard (left to right) binds
/// `param_names[i]`.
///
/// Parameter names use `Arc<str>` rather than `String` so that binding
/// captured text at match time clones an `Arc` (O(1) atomic increment)
/// instead of copying the name.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    /// Ordered literal/wildcard segments of the pattern
    pub segments: Vec<Segment>,
    /// Parameter names bound by the wildcard segments, in order
    pub param_names: Vec<Arc<str>>,
}

impl CompiledRoute {
    /// Compile a pattern string into its segment sequence.
    ///
    /// Splits on `/`, trims whitespace around each fragment, and drops empty
    /// fragments, so leading, trailing, and duplicate slashes are all
    /// tolerated. A fragment of the exact form `:name` (one or more word
    /// characters) becomes a wildcard binding `name`; any other non-empty
    /// fragment is literal. The empty pattern compiles to zero segments and
    /// denotes the root route.
    ///
    /// Every string is a valid pattern; there is no error path.
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut param_names = Vec::new();
        for fragment in split_path(pattern) {
            if let Some(caps) = WILDCARD_RE.captures(fragment) {
                segments.push(Segment::Wildcard);
                param_names.push(Arc::from(&caps[1]));
            } else {
                segments.push(Segment::Literal(fragment.to_string()));
            }
        }
        Self {
            segments,
            param_names,
        }
    }

    /// Render the normalized form of the pattern (single slashes, trimmed
    /// fragments, `:name` wildcards). The root route renders as `/`.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        let mut wildcard = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "/{text}")?,
                Segment::Wildcard => {
                    write!(f, "/:{}", self.param_names[wildcard])?;
                    wildcard += 1;
                }
            }
        }
        Ok(())
    }
}

/// Split a path or pattern into its non-empty, whitespace-trimmed segments.
///
/// This is the single segmentation rule shared by compilation and matching;
/// the only difference between the two is that matching never interprets
/// `:name` syntax.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Registered route stored at a terminal trie node
pub(crate) struct Terminal<T> {
    /// The opaque element registered under the pattern
    pub element: T,
    /// The compiled route, kept for parameter-name binding and logging
    pub route: CompiledRoute,
}

/// Node in the route trie
///
/// Literal children are keyed by their exact segment text; the wildcard
/// transition, if any, is a single separate child. Keeping the two apart
/// makes the literal-over-wildcard preference structural and lets lookup
/// probe the literal map with the borrowed raw segment (no allocation).
pub(crate) struct TrieNode<T> {
    /// Literal transitions, at most one per distinct segment text
    literals: HashMap<String, TrieNode<T>>,
    /// The wildcard transition, at most one per node
    wildcard: Option<Box<TrieNode<T>>>,
    /// Registered route ending at this node, if any
    terminal: Option<Terminal<T>>,
}

impl<T> TrieNode<T> {
    pub fn new() -> Self {
        Self {
            literals: HashMap::new(),
            wildcard: None,
            terminal: None,
        }
    }

    /// Insert a compiled route, walking/creating one node per segment and
    /// setting the terminal on the final node. Re-registering the exact same
    /// pattern replaces the earlier terminal (last write wins); distinct
    /// patterns never collide because trie paths are unique per segment
    /// sequence.
    pub fn insert(&mut self, route: CompiledRoute, element: T) {
        let segments = route.segments.clone();
        self.insert_at(&segments, Terminal { element, route });
    }

    fn insert_at(&mut self, segments: &[Segment], terminal: Terminal<T>) {
        let (head, rest) = match segments.split_first() {
            None => {
                self.terminal = Some(terminal);
                return;
            }
            Some(parts) => parts,
        };
        let child = match head {
            Segment::Literal(text) => self
                .literals
                .entry(text.clone())
                .or_insert_with(TrieNode::new),
            Segment::Wildcard => self.wildcard.get_or_insert_with(|| Box::new(TrieNode::new())),
        };
        child.insert_at(rest, terminal);
    }

    /// Walk the trie against raw path segments.
    ///
    /// At each node the literal transition for the current segment is
    /// preferred; failing that, the wildcard transition is taken and the raw
    /// text recorded as a positional capture; failing both, the match fails
    /// immediately. There is no backtracking: specificity is structural, so
    /// no route needs priority metadata.
    ///
    /// Once every input segment is consumed the final node must hold a
    /// terminal; a node that exists only as an internal prefix is not a
    /// match.
    pub fn search<'s, 'p>(
        &'s self,
        segments: &[&'p str],
        captures: &mut CaptureVec<'p>,
    ) -> Option<&'s Terminal<T>> {
        let (head, rest) = match segments.split_first() {
            None => return self.terminal.as_ref(),
            Some(parts) => parts,
        };
        if let Some(child) = self.literals.get(*head) {
            return child.search(rest, captures);
        }
        if let Some(child) = &self.wildcard {
            captures.push(*head);
            return child.search(rest, captures);
        }
        None
    }
}
