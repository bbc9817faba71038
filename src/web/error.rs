use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::services::activities_service::ActivitiesError;

/// Error returned by JSON handlers and extractors. Renders as `{"detail": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Activities(#[from] ActivitiesError),
    #[error("email query parameter is required")]
    MissingEmail,
    // Path/query input axum could not decode.
    #[error("{detail}")]
    Malformed { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Activities(ActivitiesError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Activities(
                ActivitiesError::AlreadyRegistered
                | ActivitiesError::NotRegistered
                | ActivitiesError::ActivityFull,
            ) => StatusCode::BAD_REQUEST,
            ApiError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Malformed { status, .. } => *status,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiError::Activities(err) => err.label(),
            ApiError::MissingEmail => "missing_email",
            ApiError::Malformed { .. } => "malformed_request",
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = self.label(), "request rejected");
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
