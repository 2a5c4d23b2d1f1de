//! Course resource handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::resource::{CreateResource, ResourceResponse, UpdateResource};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/course-resources
pub async fn list_resources(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ResourceResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let resources = state.resource_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(resources)))
}

/// GET /api/course-resources/all
pub async fn list_resource_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.resource_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/course-resources/{id}
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ResourceResponse>>, ApiError> {
    let resource = state.resource_service.get(id).await?;
    Ok(Json(ApiResponse::ok(resource)))
}

/// POST /api/course-resources
pub async fn create_resource(
    State(state): State<AppState>,
    Json(req): Json<CreateResource>,
) -> Result<(StatusCode, Json<ApiResponse<ResourceResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let resource = state.resource_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}

/// PUT /api/course-resources/{id}
pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateResource>,
) -> Result<Json<ApiResponse<ResourceResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let resource = state.resource_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(resource)))
}

/// DELETE /api/course-resources/{id}
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.resource_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
