//! Payment lookup handler.

use axum::Json;
use axum::extract::{Path, State};

use registry_auth::PaymentView;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/payments/{member_no}
pub async fn lookup_payment(
    State(state): State<AppState>,
    Path(member_no): Path<u32>,
) -> Result<Json<ApiResponse<PaymentView>>, ApiError> {
    let payment = state.session_authority.lookup_payment(member_no).await?;
    Ok(Json(ApiResponse::ok(payment)))
}
