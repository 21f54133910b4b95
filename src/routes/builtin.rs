//! Handlers registered by default.

use serde::Serialize;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::routes::RouteTable;

pub const HOME_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>minihttpd</title></head>
<body>
<h1>It works!</h1>
<p>This page is served by a dynamic route. Other paths are looked up under the document root.</p>
<ul>
<li><a href=\"/about\">About</a></li>
<li><a href=\"/health\">Health</a></li>
<li><a href=\"/hello?name=friend\">Hello</a></li>
</ul>
</body>
</html>
";

pub const ABOUT_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>About minihttpd</title></head>
<body>
<h1>About</h1>
<p>A small HTTP/1.1 server. GET only, one response per connection.</p>
<p><a href=\"/\">Home</a></p>
</body>
</html>
";

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// The default table: `/`, `/about`, `/health`, `/hello`.
pub fn default_routes() -> RouteTable {
    RouteTable::new()
        .route("/", home)
        .route("/about", about)
        .route("/health", health)
        .route("/hello", hello)
}

pub fn home(_request: &Request) -> Response {
    Response::html(HOME_PAGE)
}

pub fn about(_request: &Request) -> Response {
    Response::html(ABOUT_PAGE)
}

pub fn health(_request: &Request) -> Response {
    let payload = Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    };

    // Serializing a struct of string fields cannot fail
    let body = serde_json::to_vec(&payload).unwrap_or_else(|_| br#"{"status":"ok"}"#.to_vec());
    Response::json(body)
}

/// Greets the `name` query parameter, or "world".
pub fn hello(request: &Request) -> Response {
    let name = request
        .query_param("name")
        .filter(|name| !name.is_empty())
        .unwrap_or("world");
    Response::text(format!("Hello, {name}!\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::RequestBuilder;

    #[test]
    fn health_is_json_with_status() {
        let req = RequestBuilder::new().path("/health").build().unwrap();
        let resp = health(&req);
        let value: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();

        assert_eq!(resp.content_type, "application/json");
        assert_eq!(value["status"], "ok");
    }

    #[test]
    fn hello_uses_first_name_param() {
        let req = RequestBuilder::new()
            .path("/hello")
            .query_param("name", "Ada Lovelace")
            .query_param("name", "ignored")
            .build()
            .unwrap();

        assert_eq!(hello(&req).body, b"Hello, Ada Lovelace!\n");
    }

    #[test]
    fn hello_defaults_to_world() {
        let req = RequestBuilder::new().path("/hello").build().unwrap();
        assert_eq!(hello(&req).body, b"Hello, world!\n");
    }
}
