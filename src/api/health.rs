use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for monitoring: `{"status": "ok", "version": <crate version>}`.
///
/// Never calls Spotify.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Plain text greeting served at `/` when the static directory has no `index.html`.
pub async fn welcome() -> &'static str {
    "Welcome to your Spotify Tracker!"
}
