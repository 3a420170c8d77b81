//! User registry handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use registry_core::error::AppError;
use registry_entity::user::UserRecord;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest, validate_request};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserRecord>>>, ApiError> {
    let users = state.user_store.list().await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserRecord>>), ApiError> {
    validate_request(&req)?;

    let user = state.user_store.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// PUT /api/users/{id}
///
/// An unknown id leaves the store untouched and answers 404.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserRecord>>, ApiError> {
    validate_request(&req)?;

    let user = state
        .user_store
        .update(&id, req.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{id}' not found")))?;

    Ok(Json(ApiResponse::ok(user)))
}
