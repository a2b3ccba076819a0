use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Rejections from the signup/unregister state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    #[error("Activity is full")]
    Full,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl SignupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::NotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadyRegistered | SignupError::Full | SignupError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

/// A seed that would violate the store invariants, or could not be read.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("activity name must not be empty")]
    EmptyName,

    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),

    #[error("{0}: max_participants must be positive")]
    ZeroCapacity(String),

    #[error("{activity}: duplicate participant {email}")]
    DuplicateParticipant { activity: String, email: String },

    #[error("{activity}: {count} participants exceed capacity {max}")]
    OverCapacity {
        activity: String,
        count: usize,
        max: u32,
    },

    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}
