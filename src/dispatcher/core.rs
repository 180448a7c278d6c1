//! Dispatcher core module - dispatch path for navigation events.

use tracing::{debug, info};

use crate::router::{ParamVec, Router};

/// Success handler invoked with the matched element and captured parameters
pub type RouteHandler<T> = Box<dyn Fn(&T, &ParamVec)>;

/// Failure handler invoked with the original raw path of an unmatched dispatch
pub type ErrorHandler = Box<dyn Fn(&str)>;

/// Dispatcher that resolves paths and invokes the bound handlers
///
/// Holds one success handler and one optional failure handler; both are
/// replaceable at any time and take effect from the next dispatch onward.
/// The underlying router is read-only after construction, so `go` never
/// mutates shared state and repeated dispatches of the same path are
/// idempotent from the router's point of view.
pub struct Dispatcher<T> {
    router: Router<T>,
    on_route: Option<RouteHandler<T>>,
    on_route_error: Option<ErrorHandler>,
}

impl<T> Dispatcher<T> {
    /// Create a dispatcher around a built router, with both handler slots
    /// empty. Bind a success handler with [`on_route`](Self::on_route) before
    /// the first dispatch.
    #[must_use]
    pub fn new(router: Router<T>) -> Self {
        Self {
            router,
            on_route: None,
            on_route_error: None,
        }
    }

    /// Bind (or replace) the success handler, returning `&mut Self` for
    /// chaining. Rebinding does not replay past dispatches.
    pub fn on_route<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&T, &ParamVec) + 'static,
    {
        self.on_route = Some(Box::new(handler));
        self
    }

    /// Bind (or replace) the failure handler, returning `&mut Self` for
    /// chaining. With no failure handler bound, unmatched dispatches are
    /// dropped silently.
    pub fn on_route_error<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_route_error = Some(Box::new(handler));
        self
    }

    /// Resolve a path and invoke the appropriate handler.
    ///
    /// On a match the success handler runs with `(element, params)`; on a
    /// miss the failure handler runs with the original raw path, if bound.
    ///
    /// # Panics
    ///
    /// Panics if the path matches and no success handler is bound. That is a
    /// configuration error in the embedding layer, not a runtime condition,
    /// so it fails fast instead of returning an error.
    pub fn go(&self, path: &str) {
        match self.router.route(path) {
            Some(matched) => {
                #[allow(clippy::expect_used)]
                let handler = self
                    .on_route
                    .as_ref()
                    .expect("dispatched with no success handler bound; call on_route() first");
                info!(
                    path = %path,
                    pattern = %matched.route,
                    "Dispatching matched route"
                );
                handler(matched.element, &matched.params);
            }
            None => match &self.on_route_error {
                Some(handler) => {
                    info!(path = %path, "Dispatching unmatched path to failure handler");
                    handler(path);
                }
                None => {
                    // Intentional "do nothing" policy, not an error
                    debug!(path = %path, "Unmatched dispatch dropped; no failure handler bound");
                }
            },
        }
    }

    /// The underlying router
    #[must_use]
    pub fn router(&self) -> &Router<T> {
        &self.router
    }
}
