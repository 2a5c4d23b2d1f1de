//! Course certificate handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::PageResponse;
use learnhub_entity::certificate::{CertificateResponse, CreateCertificate, UpdateCertificate};

use crate::dto::response::ApiResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/course-certificates
pub async fn list_certificates(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<CertificateResponse>>>, ApiError> {
    let (page, sort) = params.into_parts();
    let certificates = state.certificate_service.list(&page, sort.as_ref()).await?;
    Ok(Json(ApiResponse::ok(certificates)))
}

/// GET /api/course-certificates/all
pub async fn list_certificate_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SelectOption>>>, ApiError> {
    let options = state.certificate_service.list_options().await?;
    Ok(Json(ApiResponse::ok(options)))
}

/// GET /api/course-certificates/{id}
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CertificateResponse>>, ApiError> {
    let certificate = state.certificate_service.get(id).await?;
    Ok(Json(ApiResponse::ok(certificate)))
}

/// POST /api/course-certificates
pub async fn create_certificate(
    State(state): State<AppState>,
    Json(req): Json<CreateCertificate>,
) -> Result<(StatusCode, Json<ApiResponse<CertificateResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let certificate = state.certificate_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(certificate))))
}

/// PUT /api/course-certificates/{id}
pub async fn update_certificate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCertificate>,
) -> Result<Json<ApiResponse<CertificateResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let certificate = state.certificate_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(certificate)))
}

/// DELETE /api/course-certificates/{id}
pub async fn delete_certificate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.certificate_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
