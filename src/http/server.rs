//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, limits, API key)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - The store lives in `AppState` behind an `Arc`; tests inject a fresh
//!   store per server instance
//! - Root and /hello sit outside the authenticated sub-router
//! - `/api/products/search` and `/api/products/stats` register as literal
//!   routes so the `{id}` capture never shadows them

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::middleware::require_api_key;
use crate::store::ProductStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProductStore>,
    pub config: Arc<AppConfig>,
}

/// HTTP server for the product API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server over the seeded bootstrap catalog.
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(config, ProductStore::with_seed_data())
    }

    /// Create a server over a caller-supplied store (used by tests).
    pub fn with_store(config: AppConfig, store: ProductStore) -> Self {
        let state = AppState {
            store: Arc::new(store),
            config: Arc::new(config.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let api = Router::new()
            .route(
                "/api/products",
                get(handlers::list_products).post(handlers::create_product),
            )
            .route("/api/products/search", get(handlers::search_products))
            .route("/api/products/stats", get(handlers::product_stats))
            .route(
                "/api/products/{id}",
                get(handlers::get_product)
                    .put(handlers::update_product)
                    .delete(handlers::delete_product),
            )
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_api_key,
            ));

        Router::new()
            .route("/", get(handlers::root))
            .route("/hello", get(handlers::hello))
            .merge(api)
            .fallback(handlers::not_found_fallback)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
