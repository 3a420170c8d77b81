//! Authentication and session validation handlers.

use axum::Json;
use axum::extract::State;

use registry_auth::{AuthOutcome, SessionView};

use crate::dto::request::{AuthenticateRequest, ValidateSessionRequest, validate_request};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth
///
/// Always answers 200; an unregistered email is reported through the
/// outcome's `code` field.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(req): Json<AuthenticateRequest>,
) -> Result<Json<ApiResponse<AuthOutcome>>, ApiError> {
    let outcome = state.session_authority.authenticate(&req.email).await?;

    Ok(Json(ApiResponse::ok(outcome)))
}

/// POST /api/session
pub async fn validate_session(
    State(state): State<AppState>,
    Json(req): Json<ValidateSessionRequest>,
) -> Result<Json<ApiResponse<SessionView>>, ApiError> {
    validate_request(&req)?;

    let session = state
        .session_authority
        .validate_session(&req.token_id, &req.email)
        .await?;

    Ok(Json(ApiResponse::ok(session)))
}
