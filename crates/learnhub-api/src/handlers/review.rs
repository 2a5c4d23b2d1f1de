//! Review handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::review::{CreateReview, ReviewResponse, UpdateReview};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ReviewResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let reviews = state.review_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(reviews)))
}

/// GET /api/reviews/all
pub async fn list_review_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.review_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReviewResponse>>, ApiError> {
    let review = state.review_service.get(id).await?;
    Ok(Json(ApiResponse::ok(review)))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(req): Json<CreateReview>,
) -> Result<(StatusCode, Json<ApiResponse<ReviewResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let review = state.review_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review))))
}

/// PUT /api/reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateReview>,
) -> Result<Json<ApiResponse<ReviewResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let review = state.review_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(review)))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.review_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
