use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::http::parser::{find_headers_end, parse_request, MAX_REQUEST_SIZE};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

const READ_CHUNK: usize = 1024;

/// One accepted connection, driven through a single request/response exchange.
pub struct Connection<S> {
    stream: S,
    buffer: Vec<u8>,
    state: ConnectionState,
    router: Arc<Router>,
    read_timeout: Duration,
}

pub enum ConnectionState {
    Reading,
    Parsing,
    Routing(Request),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, read_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
            router,
            read_timeout,
        }
    }

    /// Runs the exchange to completion. At most one response is written and
    /// the stream is shut down before returning.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(true) => ConnectionState::Parsing,
                    Ok(false) => ConnectionState::Closed,
                    Err(e) => {
                        debug!("Read failed, closing without response: {}", e);
                        ConnectionState::Closed
                    }
                },

                ConnectionState::Parsing => match parse_request(&self.buffer) {
                    Ok(request) => ConnectionState::Routing(request),
                    Err(e) => {
                        debug!("Malformed request: {}", e);
                        let response = Response::error(e.status());
                        info!(
                            status = response.status.as_u16(),
                            bytes = response.body.len(),
                            "malformed request"
                        );
                        ConnectionState::Responding(ResponseWriter::new(&response))
                    }
                },

                ConnectionState::Routing(request) => {
                    let response = self.router.route(&request).await;
                    info!(
                        method = %request.method,
                        path = %request.path,
                        status = response.status.as_u16(),
                        bytes = response.body.len(),
                        "request"
                    );
                    ConnectionState::Responding(ResponseWriter::new(&response))
                }

                ConnectionState::Responding(mut writer) => {
                    writer.write_to(&mut self.stream).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        // The peer may already be gone; nothing left to report either way
        let _ = self.stream.shutdown().await;
        Ok(())
    }

    /// Reads the request head, giving up after `read_timeout`.
    ///
    /// On timeout, whatever arrived is still parsed if it holds a complete
    /// request line. Returns `false` when there is nothing to answer.
    pub async fn read_request(&mut self) -> anyhow::Result<bool> {
        let read_timeout = self.read_timeout;

        match tokio::time::timeout(read_timeout, self.fill_buffer()).await {
            Ok(result) => result?,
            Err(_) => {
                debug!("Read timed out after {:?}", read_timeout);
                if !self.buffer.contains(&b'\n') {
                    return Ok(false);
                }
            }
        }

        Ok(!self.buffer.is_empty())
    }

    /// Fills the buffer until the header block ends, the size cap is hit or
    /// the peer stops sending.
    async fn fill_buffer(&mut self) -> anyhow::Result<()> {
        let mut chunk = [0u8; READ_CHUNK];

        while self.buffer.len() < MAX_REQUEST_SIZE && find_headers_end(&self.buffer).is_none() {
            let room = (MAX_REQUEST_SIZE - self.buffer.len()).min(READ_CHUNK);
            let n = self.stream.read(&mut chunk[..room]).await?;

            if n == 0 {
                break;
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }

        Ok(())
    }
}

/// Handles one connection end to end: read, parse, route, respond, close.
pub async fn handle_connection<S>(
    stream: S,
    router: Arc<Router>,
    read_timeout: Duration,
) -> anyhow::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    Connection::new(stream, router, read_timeout).run().await
}
