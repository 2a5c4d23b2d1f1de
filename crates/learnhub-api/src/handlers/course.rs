//! Course handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::course::{CourseResponse, CreateCourse, UpdateCourse};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/courses
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<CourseResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let courses = state.course_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(courses)))
}

/// GET /api/courses/all
pub async fn list_course_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.course_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let course = state.course_service.get(id).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// POST /api/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourse>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let course = state.course_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(course))))
}

/// PUT /api/courses/{id}
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCourse>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let course = state.course_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// DELETE /api/courses/{id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.course_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
