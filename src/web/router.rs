use std::path::Path;

use axum::{
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::activities_service::ActivitiesService;
use crate::web::routes::{activities, activity, index};

pub fn build_router(service: ActivitiesService, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::activity_unregister_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        // Participant lists change on every signup; never let a browser cache them.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
