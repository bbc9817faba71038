use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::request::Parts,
    Json,
};
use serde::Serialize;

use crate::services::activities_service::ActivitiesService;
use crate::web::error::ApiError;

/// Percent-decoded `:activity_name` path segment.
#[derive(Debug)]
pub struct ActivityName(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ActivityName {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(name))
    }
}

/// The `email` query parameter. When the key repeats, the last value wins.
#[derive(Debug)]
pub struct EmailParam(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for EmailParam {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| Self(value))
            .ok_or(ApiError::MissingEmail)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activity_signup_handler(
    ActivityName(activity_name): ActivityName,
    EmailParam(email): EmailParam,
    State(service): State<ActivitiesService>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = service.signup(&activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn activity_unregister_handler(
    ActivityName(activity_name): ActivityName,
    EmailParam(email): EmailParam,
    State(service): State<ActivitiesService>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = service.unregister(&activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}
