mod config;
mod logging;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::auth_relay::{AuthUpstream, HttpAuthUpstream};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = logging::try_init() {
        eprintln!("logging init failed: {e}");
    }

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Relay is optional: without it the admin gate always redirects.
    let auth: Option<Arc<dyn AuthUpstream>> = match &config.auth {
        Some(relay) => match HttpAuthUpstream::new(relay) {
            Ok(upstream) => {
                tracing::info!(base_url = upstream.base_url(), "auth relay initialized");
                Some(Arc::new(upstream) as Arc<dyn AuthUpstream>)
            }
            Err(e) => {
                tracing::error!(error = %e, "auth relay init failed");
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("AUTH_SERVICE_URL not set; admin sign-in disabled");
            None
        }
    };

    let app = match routes::app(state::AppState::new(auth)) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "academy listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c listener failed; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
