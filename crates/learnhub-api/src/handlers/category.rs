//! Course category handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::category::{CategoryResponse, CreateCategory, UpdateCategory};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/course-categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<CategoryResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let categories = state.category_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/course-categories/all
pub async fn list_category_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.category_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/course-categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    let category = state.category_service.get(id).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// POST /api/course-categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategory>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let category = state.category_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// PUT /api/course-categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategory>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let category = state.category_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/course-categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.category_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
