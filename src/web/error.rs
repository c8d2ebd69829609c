use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::activities_service::ActivitiesError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    Activities(ActivitiesError),
    InvalidPath(String),
    InvalidQuery(String),
    NotFound,
    MethodNotAllowed,
}

impl From<ActivitiesError> for ApiError {
    fn from(e: ActivitiesError) -> Self {
        ApiError::Activities(e)
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::InvalidPath(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::InvalidQuery(e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Activities(e) => {
                let status = match e {
                    ActivitiesError::ActivityNotFound => StatusCode::NOT_FOUND,
                    ActivitiesError::AlreadySignedUp
                    | ActivitiesError::NotSignedUp
                    | ActivitiesError::ActivityFull => StatusCode::BAD_REQUEST,
                };
                (status, e.to_string())
            }
            ApiError::InvalidPath(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::InvalidQuery(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Fallback for requests that match no route or static file.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
