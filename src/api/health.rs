use axum::response::Json;
use serde_json::{Value, json};

/// Always `200` with name and version; touches no upstream.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
