//! Product Catalog HTTP API
//!
//! A small JSON CRUD service built with Tokio and Axum.
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                PRODUCT API                  │
//!                    │                                             │
//!   Client Request   │  ┌────────┐   ┌──────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│ trace/ │──▶│ api-key  │──▶│ handlers │  │
//!                    │  │ req-id │   │ check    │   │  (CRUD)  │  │
//!                    │  └────────┘   └──────────┘   └────┬─────┘  │
//!                    │                                    │        │
//!                    │                                    ▼        │
//!                    │                            ┌──────────────┐ │
//!   Client Response  │  ┌───────────────┐         │  in-memory   │ │
//!   ◀────────────────┼──│ error envelope│◀────────│   catalog    │ │
//!                    │  └───────────────┘         └──────────────┘ │
//!                    └────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_api::config;
use product_api::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("product-api v0.1.0 starting");

    // Load configuration from the environment (PORT, API_KEY)
    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        port = config.listener.port,
        api_key_configured = config.auth.api_key.is_some(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.socket_addr()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
