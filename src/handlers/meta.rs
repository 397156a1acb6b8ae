//! Service metadata, liveness, and readiness.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "customers": "/api/v1/customers",
            "rentals": "/api/v1/rentals",
            "auth": "/api/v1/auth",
        }
    }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Readiness probe: opens a connection and runs `SELECT 1` against the store.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<HealthBody>, (StatusCode, Json<HealthBody>)> {
    let reachable = match state.store.connect().await {
        Ok(mut conn) => sqlx::query("SELECT 1").fetch_optional(&mut conn).await.is_ok(),
        Err(_) => false,
    };
    if !reachable {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthBody { status: "degraded" }),
        ));
    }
    Ok(Json(HealthBody { status: "ok" }))
}
