//! Course progress log handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::progress_log::{CreateProgressLog, ProgressLogResponse, UpdateProgressLog};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/course-progress-logs
pub async fn list_progress_logs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ProgressLogResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let logs = state
        .progress_log_service
        .list(&page, sort.as_ref())
        .await?;
    Ok(Json(ApiResponse::ok(logs)))
}

/// GET /api/course-progress-logs/all
pub async fn list_progress_log_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.progress_log_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/course-progress-logs/{id}
pub async fn get_progress_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProgressLogResponse>>, ApiError> {
    let log = state.progress_log_service.get(id).await?;
    Ok(Json(ApiResponse::ok(log)))
}

/// POST /api/course-progress-logs
pub async fn create_progress_log(
    State(state): State<AppState>,
    Json(req): Json<CreateProgressLog>,
) -> Result<(StatusCode, Json<ApiResponse<ProgressLogResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let log = state.progress_log_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(log))))
}

/// PUT /api/course-progress-logs/{id}
pub async fn update_progress_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProgressLog>,
) -> Result<Json<ApiResponse<ProgressLogResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let log = state.progress_log_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(log)))
}

/// DELETE /api/course-progress-logs/{id}
pub async fn delete_progress_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.progress_log_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
