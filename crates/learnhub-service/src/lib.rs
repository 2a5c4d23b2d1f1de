//! # learnhub-service
//!
//! Business logic services for LearnHub. Each service wraps the matching
//! repository, enforces referential checks that the database alone would
//! report too late, resolves related-row summaries for detail responses,
//! and publishes a domain event after every successful mutation.

pub mod category;
pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod payment;
pub mod progress_log;
pub mod resource;
pub mod review;
pub mod tag;
pub mod tag_relation;

pub use category::CategoryService;
pub use certificate::CertificateService;
pub use course::CourseService;
pub use enrollment::EnrollmentService;
pub use lesson::LessonService;
pub use payment::PaymentService;
pub use progress_log::ProgressLogService;
pub use resource::ResourceService;
pub use review::ReviewService;
pub use tag::TagService;
pub use tag_relation::TagRelationService;

use learnhub_core::{AppError, AppResult};

/// Reject non-positive ids before they reach the database.
pub(crate) fn ensure_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::validation("id must be a positive integer"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_core::error::ErrorKind;

    #[test]
    fn test_ensure_id_rejects_zero_and_negative() {
        assert!(ensure_id(1).is_ok());
        assert_eq!(ensure_id(0).unwrap_err().kind, ErrorKind::Validation);
        assert_eq!(ensure_id(-5).unwrap_err().kind, ErrorKind::Validation);
    }
}
