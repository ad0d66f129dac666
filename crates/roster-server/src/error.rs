use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::{ErrorKind, RosterError};

// ---------------------------------------------------------------------------
// Internal sentinel for request validation failures
// ---------------------------------------------------------------------------

/// Private sentinel error type used to carry an explicit HTTP 422 through
/// the `anyhow::Error` chain without touching the `RosterError` enum.
#[derive(Debug)]
struct UnprocessableError(String);

impl std::fmt::Display for UnprocessableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnprocessableError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses. Bodies are `{"detail": "..."}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 422 Unprocessable Entity error for a malformed request.
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self(UnprocessableError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(u) = self.0.downcast_ref::<UnprocessableError>() {
            let body = serde_json::json!({ "detail": u.0.clone() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
        }

        let status = match self.0.downcast_ref::<RosterError>().map(RosterError::kind) {
            Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
            Some(ErrorKind::Conflict) => StatusCode::BAD_REQUEST,
            Some(ErrorKind::Invalid) | Some(ErrorKind::Internal) | None => {
                tracing::error!(error = %self.0, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
