use anyhow::Context;
use minihttpd::config::Config;
use minihttpd::files::StaticFiles;
use minihttpd::routes::{builtin, Router};
use minihttpd::server::Server;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port_arg = std::env::args().nth(1);
    let cfg = Config::load(port_arg.as_deref()).context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();

    if !cfg.document_root.is_dir() {
        tracing::warn!(
            "Document root {} is not a directory; static requests will return 404",
            cfg.document_root.display()
        );
    }

    let files = StaticFiles::new(&cfg.document_root, &cfg.index_file);
    let router = Router::new(builtin::default_routes(), files);
    let server = Server::bind(&cfg, router)?;

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    server.run(shutdown).await
}

async fn watch_signals(shutdown: CancellationToken) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received");
    shutdown.cancel();
}
