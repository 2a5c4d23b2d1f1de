//! Enrollment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::enrollment::{CreateEnrollment, EnrollmentResponse, UpdateEnrollment};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<EnrollmentResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let enrollments = state.enrollment_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(enrollments)))
}

/// GET /api/enrollments/all
pub async fn list_enrollment_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.enrollment_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/enrollments/{id}
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<EnrollmentResponse>>, ApiError> {
    let enrollment = state.enrollment_service.get(id).await?;
    Ok(Json(ApiResponse::ok(enrollment)))
}

/// POST /api/enrollments
pub async fn create_enrollment(
    State(state): State<AppState>,
    Json(req): Json<CreateEnrollment>,
) -> Result<(StatusCode, Json<ApiResponse<EnrollmentResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let enrollment = state.enrollment_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(enrollment))))
}

/// PUT /api/enrollments/{id}
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEnrollment>,
) -> Result<Json<ApiResponse<EnrollmentResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let enrollment = state.enrollment_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(enrollment)))
}

/// DELETE /api/enrollments/{id}
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.enrollment_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
