//! Enrollment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A student's enrollment in a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    /// Primary key.
    pub id: i64,
    /// When the student enrolled.
    pub enrolled_at: DateTime<Utc>,
    /// Completion progress in percent (0-100).
    pub progress: i32,
    /// Whether the course has been completed.
    pub completed: bool,
    /// The student's user id (platform identity service).
    pub student_id: i64,
    /// The enrolled course.
    pub course_id: i64,
    /// When the enrollment was created.
    pub created_at: DateTime<Utc>,
    /// When the enrollment was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    /// Human-readable display name. Enrollments have no natural name
    /// field, so fall back to an id-based label.
    pub fn display_name(&self) -> String {
        format!("Enrollment #{}", self.id)
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved course
    /// summary when available.
    pub fn into_response(self, course: Option<SelectOption>) -> EnrollmentResponse {
        EnrollmentResponse {
            id: self.id,
            enrolled_at: self.enrolled_at,
            progress: self.progress,
            completed: self.completed,
            student_id: self.student_id,
            course_id: self.course_id,
            course,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEnrollment {
    /// The student's user id.
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: i64,
    /// The course to enroll in.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: i64,
    /// When the student enrolled (defaults to now).
    pub enrolled_at: Option<DateTime<Utc>>,
    /// Initial progress in percent.
    #[validate(range(min = 0, max = 100, message = "progress must be 0-100"))]
    #[serde(default)]
    pub progress: i32,
    /// Whether the course is already completed.
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an enrollment. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEnrollment {
    /// New student id.
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: Option<i64>,
    /// New course id.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: Option<i64>,
    /// New enrollment time.
    pub enrolled_at: Option<DateTime<Utc>>,
    /// New progress in percent.
    #[validate(range(min = 0, max = 100, message = "progress must be 0-100"))]
    pub progress: Option<i32>,
    /// New completion flag.
    pub completed: Option<bool>,
}

/// API response for an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    /// Primary key.
    pub id: i64,
    /// When the student enrolled.
    pub enrolled_at: DateTime<Utc>,
    /// Completion progress in percent.
    pub progress: i32,
    /// Whether the course has been completed.
    pub completed: bool,
    /// The student's user id.
    pub student_id: i64,
    /// The enrolled course.
    pub course_id: i64,
    /// Course summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<SelectOption>,
    /// When the enrollment was created.
    pub created_at: DateTime<Utc>,
    /// When the enrollment was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_id() {
        let enrollment = Enrollment {
            id: 17,
            enrolled_at: Utc::now(),
            progress: 40,
            completed: false,
            student_id: 3,
            course_id: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        assert_eq!(enrollment.display_name(), "Enrollment #17");
        assert_eq!(enrollment.to_select_option().name, "Enrollment #17");
    }
}
