use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/health — liveness probe with the activity count.
pub async fn health(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "activities": app.roster.len(),
    }))
}
