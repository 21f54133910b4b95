//! minihttpd - a small concurrent HTTP/1.1 server
//!
//! Answers GET requests from a table of dynamic routes or from files under a
//! document root. Each accepted connection is handled by its own detached task
//! and closed after a single response.

pub mod config;
pub mod files;
pub mod http;
pub mod routes;
pub mod server;
