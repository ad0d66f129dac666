use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use roster_core::Catalog;

use crate::error::AppError;
use crate::state::AppState;

/// The `?email=` part of a participant request.
///
/// Built from raw key/value pairs so a repeated `email` resolves to the last
/// value instead of failing deserialization.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value);
        Self { email }
    }
}

/// A signup or unregister request after validation.
#[derive(Debug, PartialEq, Eq)]
pub struct ParticipantRequest {
    pub activity_name: String,
    pub email: String,
}

impl ParticipantRequest {
    /// The email is kept exactly as sent; only a missing or empty value is rejected.
    pub fn from_parts(activity_name: String, query: ParticipantQuery) -> Result<Self, AppError> {
        let email = query
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::unprocessable("email query parameter is required"))?;
        Ok(Self {
            activity_name,
            email,
        })
    }

    /// Fold extractor rejections into `AppError` so every failure is a JSON `{detail}`.
    fn extract(
        path: Result<Path<String>, PathRejection>,
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> Result<Self, AppError> {
        let Path(activity_name) = path.map_err(|e| AppError::unprocessable(e.body_text()))?;
        let Query(pairs) = query.map_err(|e| AppError::unprocessable(e.body_text()))?;
        Self::from_parts(activity_name, ParticipantQuery::from_pairs(pairs))
    }
}

#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /activities — every activity with its current participants.
pub async fn list_activities(State(app): State<AppState>) -> Json<Catalog> {
    Json(app.roster.list_activities())
}

/// POST /activities/:activity_name/signup?email= — add a participant.
pub async fn signup(
    State(app): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let req = ParticipantRequest::extract(path, query)?;
    let message = app.roster.signup(&req.activity_name, &req.email)?;
    Ok(Json(MessageResponse { message }))
}

/// DELETE /activities/:activity_name/unregister?email= — remove a participant.
pub async fn unregister(
    State(app): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let req = ParticipantRequest::extract(path, query)?;
    let message = app.roster.unregister(&req.activity_name, &req.email)?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn request_keeps_email_verbatim() {
        let req = ParticipantRequest::from_parts(
            "Chess Club".into(),
            ParticipantQuery {
                email: Some(" kim@mergington.edu ".into()),
            },
        )
        .unwrap();
        assert_eq!(req.email, " kim@mergington.edu ");
        assert_eq!(req.activity_name, "Chess Club");
    }

    #[test]
    fn request_rejects_missing_or_empty_email() {
        assert!(ParticipantRequest::from_parts(
            "Chess Club".into(),
            ParticipantQuery { email: None }
        )
        .is_err());
        assert!(ParticipantRequest::from_parts(
            "Chess Club".into(),
            ParticipantQuery {
                email: Some(String::new())
            }
        )
        .is_err());
    }

    #[test]
    fn repeated_email_takes_last_value() {
        let query = ParticipantQuery::from_pairs(pairs(&[
            ("email", "a@mergington.edu"),
            ("other", "x"),
            ("email", "b@mergington.edu"),
        ]));
        assert_eq!(query.email.as_deref(), Some("b@mergington.edu"));
    }

    #[test]
    fn query_without_email_is_empty() {
        let query = ParticipantQuery::from_pairs(pairs(&[("name", "kim")]));
        assert_eq!(query, ParticipantQuery::default());
    }
}
