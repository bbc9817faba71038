use axum::{extract::State, Json};

use crate::services::activities_service::{ActivitiesListing, ActivitiesService};

pub async fn activities_handler(State(service): State<ActivitiesService>) -> Json<ActivitiesListing> {
    Json(service.list().await)
}
