//! # Navigation Module
//!
//! The adapter boundary between the router core and its host environment.
//! The core never reads a browser location or any other global: it only
//! needs "get the current path string" and "get notified when it changes",
//! which this module expresses as the [`NavigationSource`] trait. A host
//! integration (browser history, hash fragment, server-side harness) is an
//! implementation of that trait composed around the dispatcher, not a
//! dependency of it.
//!
//! [`MemoryNavigation`] is the in-memory implementation used by tests and
//! server-side embeddings: it stores the current path and notifies
//! subscribers synchronously on every [`navigate`](NavigationSource::navigate).
//!
//! ## Wiring
//!
//! [`attach`] subscribes a dispatcher to a source so every path change is
//! dispatched:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use waypoint::{attach, Dispatcher, MemoryNavigation, NavigationSource, Router};
//!
//! let router = Router::new(vec![("/users/:id".to_string(), "get_user")]);
//! let mut dispatcher = Dispatcher::new(router);
//! dispatcher.on_route(|element, _params| println!("{element}"));
//!
//! let dispatcher = Rc::new(RefCell::new(dispatcher));
//! let mut nav = MemoryNavigation::new();
//! attach(&mut nav, Rc::clone(&dispatcher));
//!
//! nav.navigate("/users/42"); // dispatches through the router
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::dispatcher::Dispatcher;

/// Listener invoked with the new path after every navigation change
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// A host environment's view of "where we are"
///
/// Implementations translate [`navigate`](Self::navigate) into whatever
/// mechanism the host uses (history API, hash fragment, plain state) and
/// must notify every subscribed listener with the new path afterwards.
pub trait NavigationSource {
    /// The current path string
    fn current_path(&self) -> String;

    /// Register a listener to be called on every path change
    fn subscribe(&mut self, listener: ChangeListener);

    /// Programmatically set the current path and notify listeners
    fn navigate(&mut self, path: &str);
}

/// In-memory [`NavigationSource`] for tests and server-side embeddings
///
/// Starts at `/`. Notifies listeners synchronously, in subscription order,
/// on every `navigate`.
pub struct MemoryNavigation {
    path: String,
    listeners: Vec<ChangeListener>,
}

impl MemoryNavigation {
    #[must_use]
    pub fn new() -> Self {
        Self::with_path("/")
    }

    /// Create a source whose initial path is `path` (no notification fires
    /// for the initial value)
    #[must_use]
    pub fn with_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            listeners: Vec::new(),
        }
    }
}

impl Default for MemoryNavigation {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSource for MemoryNavigation {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    fn navigate(&mut self, path: &str) {
        self.path = path.to_string();
        debug!(
            path = %self.path,
            listener_count = self.listeners.len(),
            "Navigation change"
        );
        for listener in &mut self.listeners {
            listener(&self.path);
        }
    }
}

/// Wire a dispatcher to a navigation source.
///
/// Subscribes a listener that calls [`Dispatcher::go`] with every new path.
/// The dispatcher is shared behind `Rc<RefCell<..>>` so the embedding layer
/// can keep rebinding handlers while the subscription is live; dispatch only
/// takes an immutable borrow.
pub fn attach<T: 'static>(source: &mut dyn NavigationSource, dispatcher: Rc<RefCell<Dispatcher<T>>>) {
    source.subscribe(Box::new(move |path| dispatcher.borrow().go(path)));
}
