use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::web::AppState;

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": state.store.len(),
    }))
}
