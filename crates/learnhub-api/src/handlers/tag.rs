//! Course tag handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::tag::{CreateTag, TagResponse, UpdateTag};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/course-tags
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<TagResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let tags = state.tag_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(tags)))
}

/// GET /api/course-tags/all
pub async fn list_tag_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.tag_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/course-tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<TagResponse>>, ApiError> {
    let tag = state.tag_service.get(id).await?;
    Ok(Json(ApiResponse::ok(tag)))
}

/// POST /api/course-tags
pub async fn create_tag(
    State(state): State<AppState>,
    Json(req): Json<CreateTag>,
) -> Result<(StatusCode, Json<ApiResponse<TagResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let tag = state.tag_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tag))))
}

/// PUT /api/course-tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTag>,
) -> Result<Json<ApiResponse<TagResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let tag = state.tag_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(tag)))
}

/// DELETE /api/course-tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.tag_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
