//! clinic-assistant-server: assistant relay binary entrypoint.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_assistant_server::config::Config;

#[tokio::main]
async fn main() {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration; without the Gemini credential there is nothing to serve
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, refusing to start");
            std::process::exit(1);
        }
    };

    tracing::info!(model = %config.gemini_model, "Gemini API key configured");
    tracing::info!(static_dir = %config.static_dir.display(), "Serving front-end files");

    // Build application
    let app = clinic_assistant_server::build_app(&config);

    // Start server
    let addr: SocketAddr = config.bind_address.parse().expect("Invalid bind address");
    tracing::info!("Starting assistant relay on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Signal that stopped the server
#[derive(Debug, PartialEq, Eq)]
enum Shutdown {
    Interrupt,
    Terminate,
}

/// Resolve with whichever shutdown source fires first
async fn first_signal<I, T>(interrupt: I, terminate: T) -> Shutdown
where
    I: Future<Output = ()>,
    T: Future<Output = ()>,
{
    tokio::select! {
        () = interrupt => Shutdown::Interrupt,
        () = terminate => Shutdown::Terminate,
    }
}

/// Wait for SIGINT or SIGTERM.
///
/// A signal source that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    use tokio::signal;

    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = first_signal(interrupt, terminate).await;
    tracing::info!(signal = ?signal, "Draining in-flight assistant requests before exit");
}
