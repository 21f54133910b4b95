use tracing::{error, warn};

use crate::files::{StaticFileError, StaticFiles};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::routes::RouteTable;

/// Picks the response for a parsed request.
///
/// Order: method check (405), dynamic routes, static files. A static miss is
/// 404, an unsafe path is 400 and a failed read is 500.
#[derive(Debug)]
pub struct Router {
    routes: RouteTable,
    files: StaticFiles,
}

impl Router {
    pub fn new(routes: RouteTable, files: StaticFiles) -> Self {
        Self { routes, files }
    }

    pub async fn route(&self, request: &Request) -> Response {
        if request.method != Method::GET {
            return Response::error(StatusCode::MethodNotAllowed);
        }

        if let Some(handler) = self.routes.lookup(&request.path) {
            return handler.handle(request);
        }

        match self.files.resolve(&request.path).await {
            Ok(file) => file.into_response(),
            Err(err) => {
                match &err {
                    StaticFileError::Forbidden => {
                        warn!(path = %request.path, "Rejected unsafe path");
                    }
                    StaticFileError::Internal(e) => {
                        error!(path = %request.path, error = %e, "Failed to serve static file");
                    }
                    StaticFileError::NotFound => {}
                }
                Response::error(err.status())
            }
        }
    }
}
