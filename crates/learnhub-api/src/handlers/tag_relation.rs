//! Course-to-tag relation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::tag_relation::{CreateTagRelation, TagRelationResponse, UpdateTagRelation};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/course-tag-relations
pub async fn list_tag_relations(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<TagRelationResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let relations = state
        .tag_relation_service
        .list(&page, sort.as_ref())
        .await?;
    Ok(Json(ApiResponse::ok(relations)))
}

/// GET /api/course-tag-relations/all
pub async fn list_tag_relation_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.tag_relation_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/course-tag-relations/{id}
pub async fn get_tag_relation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<TagRelationResponse>>, ApiError> {
    let relation = state.tag_relation_service.get(id).await?;
    Ok(Json(ApiResponse::ok(relation)))
}

/// POST /api/course-tag-relations
pub async fn create_tag_relation(
    State(state): State<AppState>,
    Json(req): Json<CreateTagRelation>,
) -> Result<(StatusCode, Json<ApiResponse<TagRelationResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let relation = state.tag_relation_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(relation))))
}

/// PUT /api/course-tag-relations/{id}
pub async fn update_tag_relation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTagRelation>,
) -> Result<Json<ApiResponse<TagRelationResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let relation = state.tag_relation_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(relation)))
}

/// DELETE /api/course-tag-relations/{id}
pub async fn delete_tag_relation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.tag_relation_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
