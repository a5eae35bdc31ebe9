//! Catalog proxy HTTP API
//!
//! Proxies the public dnd5eapi race and class catalog. Upstream failures
//! become typed non-2xx responses with a message body, never a silent empty
//! payload.

mod catalog_routes;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use reqwest::Client;

pub use catalog_routes::{get_class_info, get_classes, get_race_info, get_races};

/// Shared state for the proxy handlers
pub struct ProxyState {
    pub client: Client,
    pub upstream_base: String,
}

impl ProxyState {
    pub fn new(upstream_base: &str) -> Self {
        Self {
            client: Client::new(),
            upstream_base: upstream_base.trim_end_matches('/').to_string(),
        }
    }
}

/// Create all proxy routes
pub fn create_routes() -> Router<Arc<ProxyState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/get_races", post(catalog_routes::get_races))
        .route("/get_race_info", post(catalog_routes::get_race_info))
        .route("/get_classes", post(catalog_routes::get_classes))
        .route("/get_class_info", post(catalog_routes::get_class_info))
}

async fn health_check() -> &'static str {
    "OK"
}
