use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::ActivityTable;
use crate::services::activities_service;
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityTable> {
    Json(activities_service::list_activities(&state.db).await)
}

pub async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let message = activities_service::signup(
        &state.db,
        &activity_name,
        &query.email,
        state.capacity_policy,
    )
    .await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let message = activities_service::unregister(&state.db, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}
