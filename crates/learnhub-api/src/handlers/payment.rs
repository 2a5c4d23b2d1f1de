//! Payment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::payment::{CreatePayment, PaymentResponse, UpdatePayment};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/payments
pub async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<PaymentResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let payments = state.payment_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(payments)))
}

/// GET /api/payments/all
pub async fn list_payment_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.payment_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PaymentResponse>>, ApiError> {
    let payment = state.payment_service.get(id).await?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// POST /api/payments
pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePayment>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let payment = state.payment_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(payment))))
}

/// PUT /api/payments/{id}
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePayment>,
) -> Result<Json<ApiResponse<PaymentResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let payment = state.payment_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// DELETE /api/payments/{id}
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.payment_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
