//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: GET only, no request bodies, one
//! response per connection and always `Connection: close`.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one connection through the request-response state machine
//! - **`parser`**: Parses the request line out of the raw bytes
//! - **`query`**: Decodes the query string into ordered key/value pairs
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read the request head (max 8 KiB)
//!        └──────┬──────┘
//!               │ bytes received         (nothing / read error → Closed)
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ← Split the request line
//!        └──────┬──────┘
//!               │ request line ok        (malformed → Responding 400)
//!               ▼
//!        ┌─────────────┐
//!        │   Routing   │ ← 405 check, dynamic routes, static files
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │ Responding  │ ← Write one framed response
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Closed    │
//!        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use minihttpd::http::connection::handle_connection;
//! use tokio::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:8080").await?;
//! loop {
//!     let (socket, _addr) = listener.accept().await?;
//!     let router = Arc::clone(&router);
//!     tokio::spawn(async move {
//!         if let Err(e) = handle_connection(socket, router).await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     });
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod query;
pub mod request;
pub mod response;
pub mod writer;
