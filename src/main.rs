use std::net::SocketAddr;

use axum::ServiceExt;
use axum::extract::Request;
use dotenvy::dotenv;
use tokio::task::JoinHandle;
use tracing::{error, info};

use contact_api::bootstrap::app::build_app;
use contact_api::bootstrap::app_context::{AppContext, AppServices};
use contact_api::bootstrap::config::Config;
use contact_api::bootstrap::fatal::{install_panic_hook, shutdown_signal};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "contact_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    install_panic_hook();

    if let Err(e) = run().await {
        error!(error = ?e, "Failed to initialize or run the contact API");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = Config::from_env()?;
    info!(?cfg, "Starting contact API");

    // Storage must be reachable before accepting traffic
    let services = AppServices::connect(&cfg).await?;
    let ctx = AppContext::new(cfg.clone(), services);
    let app = build_app(ctx)?;

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    info!(%api_addr, "HTTP API listening");
    info!("Health check: http://localhost:{}/api/health", cfg.port);
    info!("Contact API: http://localhost:{}/api/contact", cfg.port);

    let api_handle: JoinHandle<anyhow::Result<()>> = tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    });

    match api_handle.await {
        Ok(Ok(())) => {
            info!("API server stopped");
            Ok(())
        }
        Ok(Err(e)) => Err(e.context("API server task failed")),
        Err(e) => Err(anyhow::Error::new(e).context("API server task panicked")),
    }
}
