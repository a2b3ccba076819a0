use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::SignupError;
use crate::services::signup_service;
use crate::web::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Response {
    let (activity_name, email) = match activity_and_email(path, query) {
        Ok(v) => v,
        Err(response) => return response,
    };

    render(signup_service::signup(&state.store, &activity_name, &email))
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Response {
    let (activity_name, email) = match activity_and_email(path, query) {
        Ok(v) => v,
        Err(response) => return response,
    };

    render(signup_service::unregister(
        &state.store,
        &activity_name,
        &email,
    ))
}

// Malformed paths and query strings get the same `{"detail"}` body as the
// domain errors. `email=` with an empty value is still a value.
fn activity_and_email(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<(String, String), Response> {
    let Path(activity_name) = path.map_err(|e| invalid_request(e.body_text()))?;
    let Query(query) = query.map_err(|e| invalid_request(e.body_text()))?;

    match query.email {
        Some(email) => Ok((activity_name, email)),
        None => {
            debug!(activity = %activity_name, "request without email parameter");
            Err(invalid_request(
                "Missing required query parameter: email".to_string(),
            ))
        }
    }
}

fn render(outcome: Result<String, SignupError>) -> Response {
    match outcome {
        Ok(message) => Json(json!({ "message": message })).into_response(),
        Err(e) => e.into_response(),
    }
}

fn invalid_request(detail: String) -> Response {
    debug!(%detail, "rejected malformed request");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": detail })),
    )
        .into_response()
}
