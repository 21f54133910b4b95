//! Dynamic routes.
//!
//! A [`RouteTable`] is an ordered list of exact-match paths, each bound to a
//! [`Handler`]. It is built once at startup and shared read-only by every
//! connection task. The [`Router`] consults it before falling back to static
//! files.

pub mod builtin;
pub mod router;

pub use router::Router;

use crate::http::request::Request;
use crate::http::response::Response;

/// Something that turns a request into a response without failing.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn handle(&self, request: &Request) -> Response {
        self(request)
    }
}

struct Route {
    path: String,
    handler: Box<dyn Handler>,
}

/// Exact-match route table. First match wins.
#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `path`. Paths are expected to be unique.
    pub fn route(mut self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
        let path = path.into();
        debug_assert!(
            self.lookup(&path).is_none(),
            "duplicate route registered: {path}"
        );
        self.routes.push(Route {
            path,
            handler: Box::new(handler),
        });
        self
    }

    pub fn lookup(&self, path: &str) -> Option<&dyn Handler> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.handler.as_ref())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.paths()).finish()
    }
}
