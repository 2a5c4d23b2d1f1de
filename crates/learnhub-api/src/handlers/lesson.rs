//! Lesson handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::lesson::{CreateLesson, LessonResponse, UpdateLesson};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/lessons
pub async fn list_lessons(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<LessonResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let lessons = state.lesson_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(lessons)))
}

/// GET /api/lessons/all
pub async fn list_lesson_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.lesson_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/lessons/{id}
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<LessonResponse>>, ApiError> {
    let lesson = state.lesson_service.get(id).await?;
    Ok(Json(ApiResponse::ok(lesson)))
}

/// POST /api/lessons
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(req): Json<CreateLesson>,
) -> Result<(StatusCode, Json<ApiResponse<LessonResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let lesson = state.lesson_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(lesson))))
}

/// PUT /api/lessons/{id}
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateLesson>,
) -> Result<Json<ApiResponse<LessonResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let lesson = state.lesson_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(lesson)))
}

/// DELETE /api/lessons/{id}
pub async fn delete_lesson(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.lesson_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
