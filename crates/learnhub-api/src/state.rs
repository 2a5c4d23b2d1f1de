//! Shared application state threaded through every handler.

use std::sync::Arc;

use sqlx::PgPool;

use learnhub_core::config::AppConfig;
use learnhub_service::{
    CategoryService, CertificateService, CourseService, EnrollmentService, LessonService,
    PaymentService, ProgressLogService, ResourceService, ReviewService, TagRelationService,
    TagService,
};

/// Application state shared across all request handlers.
///
/// Cloning is cheap; every field is either an `Arc` or internally
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database connection pool (for health checks).
    pub db_pool: PgPool,
    /// Course service.
    pub course_service: Arc<CourseService>,
    /// Category service.
    pub category_service: Arc<CategoryService>,
    /// Lesson service.
    pub lesson_service: Arc<LessonService>,
    /// Enrollment service.
    pub enrollment_service: Arc<EnrollmentService>,
    /// Payment service.
    pub payment_service: Arc<PaymentService>,
    /// Review service.
    pub review_service: Arc<ReviewService>,
    /// Tag service.
    pub tag_service: Arc<TagService>,
    /// Tag relation service.
    pub tag_relation_service: Arc<TagRelationService>,
    /// Certificate service.
    pub certificate_service: Arc<CertificateService>,
    /// Progress log service.
    pub progress_log_service: Arc<ProgressLogService>,
    /// Resource service.
    pub resource_service: Arc<ResourceService>,
}
