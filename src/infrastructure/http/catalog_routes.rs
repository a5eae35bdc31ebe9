//! Catalog proxy routes - races and classes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::ProxyState;

#[derive(Debug, Deserialize)]
pub struct RaceInfoRequest {
    pub race: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassInfoRequest {
    pub class: String,
}

/// List all races from the upstream catalog
pub async fn get_races(
    State(state): State<Arc<ProxyState>>,
) -> Result<Json<Value>, (StatusCode, String)> {
    forward(&state, "races".to_string()).await
}

/// Fetch details for a specific race
pub async fn get_race_info(
    State(state): State<Arc<ProxyState>>,
    Json(req): Json<RaceInfoRequest>,
) -> Result<Json<Value>, (StatusCode, String)> {
    forward(&state, format!("races/{}", req.race)).await
}

/// List all classes from the upstream catalog
pub async fn get_classes(
    State(state): State<Arc<ProxyState>>,
) -> Result<Json<Value>, (StatusCode, String)> {
    forward(&state, "classes".to_string()).await
}

/// Fetch details for a specific class
pub async fn get_class_info(
    State(state): State<Arc<ProxyState>>,
    Json(req): Json<ClassInfoRequest>,
) -> Result<Json<Value>, (StatusCode, String)> {
    forward(&state, format!("classes/{}", req.class)).await
}

/// GET the upstream path and pass its JSON through untouched.
/// Upstream 404 stays a 404; any other non-success becomes a 502.
async fn forward(state: &ProxyState, path: String) -> Result<Json<Value>, (StatusCode, String)> {
    let url = format!("{}/{path}", state.upstream_base);

    let response = state.client.get(&url).send().await.map_err(|e| {
        warn!(%url, error = %e, "upstream request failed");
        (
            StatusCode::BAD_GATEWAY,
            format!("upstream request failed: {e}"),
        )
    })?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err((
            StatusCode::NOT_FOUND,
            format!("'{path}' not found upstream"),
        ));
    }
    if !status.is_success() {
        warn!(%url, %status, "upstream returned non-success");
        return Err((
            StatusCode::BAD_GATEWAY,
            format!("upstream returned {status}"),
        ));
    }

    let body = response.json::<Value>().await.map_err(|e| {
        (
            StatusCode::BAD_GATEWAY,
            format!("upstream returned invalid JSON: {e}"),
        )
    })?;
    Ok(Json(body))
}
