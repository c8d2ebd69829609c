pub mod error;
pub mod routes;

use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::database::ActivitiesDb;
use crate::services::activities_service::CapacityPolicy;
use error::{method_not_allowed_handler, not_found_handler};
use routes::{activities, health, root};

#[derive(Clone)]
pub struct AppState {
    pub db: ActivitiesDb,
    pub capacity_policy: CapacityPolicy,
}

impl AppState {
    pub fn new(db: ActivitiesDb, config: &Config) -> Self {
        Self {
            db,
            capacity_policy: CapacityPolicy::from_flag(config.enforce_capacity),
        }
    }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/",
            get(root::root_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/health",
            get(health::health_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/activities",
            get(activities::list_activities_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler).fallback(method_not_allowed_handler),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(
                ServeDir::new(static_dir.as_ref())
                    .not_found_service(not_found_handler.into_service()),
            )
            .fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
