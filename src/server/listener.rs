use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::http::connection::handle_connection;
use crate::routes::Router;

/// Pending-connection queue depth passed to `listen(2)`.
pub const ACCEPT_BACKLOG: u32 = 128;

/// Pause after a failed accept so persistent errors (EMFILE) do not spin.
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Owns the listening socket and spawns one detached task per connection.
///
/// There is no cap on concurrent connections beyond the accept backlog, and
/// in-flight tasks are not awaited on shutdown.
pub struct Server {
    listener: TcpListener,
    router: Arc<Router>,
    read_timeout: Duration,
}

impl Server {
    /// Binds the configured address. Must be called inside a Tokio runtime.
    pub fn bind(cfg: &Config, router: Router) -> anyhow::Result<Self> {
        let addr = cfg
            .listen_addr()
            .to_socket_addrs()
            .with_context(|| format!("invalid listen address {}", cfg.listen_addr()))?
            .next()
            .with_context(|| format!("{} resolved to no addresses", cfg.listen_addr()))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {addr}"))?;
        let listener = socket.listen(ACCEPT_BACKLOG)?;

        Ok(Self {
            listener,
            router: Arc::new(router),
            read_timeout: cfg.read_timeout(),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts until `shutdown` is cancelled, then drops the listener.
    pub async fn run(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, no longer accepting connections");
                    break;
                }

                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((socket, peer)) => {
                            debug!("Accepted connection from {}", peer);

                            let router = Arc::clone(&self.router);
                            let read_timeout = self.read_timeout;
                            tokio::spawn(async move {
                                if let Err(e) = handle_connection(socket, router, read_timeout).await {
                                    warn!("Connection error from {}: {}", peer, e);
                                }
                            });
                        }
                        Err(e) => {
                            if shutdown.is_cancelled() {
                                break;
                            }
                            error!("Failed to accept connection: {}", e);
                            tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
