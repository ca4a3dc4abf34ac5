//! Shared utilities for integration testing.

use product_api::config::AppConfig;
use product_api::http::HttpServer;
use product_api::store::ProductStore;
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-secret-key";

/// Spawn a server over the seeded catalog on an ephemeral port.
/// Returns the base URL.
pub async fn spawn_server() -> String {
    let mut config = AppConfig::default();
    config.auth.api_key = Some(API_KEY.to_string());
    spawn_with_config(config, ProductStore::with_seed_data()).await
}

/// Spawn a server with explicit config and store.
#[allow(dead_code)]
pub async fn spawn_with_config(config: AppConfig, store: ProductStore) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::with_store(config, store);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}
