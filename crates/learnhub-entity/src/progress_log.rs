//! Course progress log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A record of a student completing a lesson within an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProgressLog {
    /// Primary key.
    pub id: i64,
    /// When the lesson was completed.
    pub completed_at: DateTime<Utc>,
    /// The enrollment the progress belongs to.
    pub enrollment_id: i64,
    /// The completed lesson.
    pub lesson_id: i64,
    /// When the log was created.
    pub created_at: DateTime<Utc>,
    /// When the log was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ProgressLog {
    /// Human-readable display name. Progress logs have no natural name
    /// field, so fall back to an id-based label.
    pub fn display_name(&self) -> String {
        format!("Progress #{}", self.id)
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved
    /// enrollment and lesson summaries when available.
    pub fn into_response(
        self,
        enrollment: Option<SelectOption>,
        lesson: Option<SelectOption>,
    ) -> ProgressLogResponse {
        ProgressLogResponse {
            id: self.id,
            completed_at: self.completed_at,
            enrollment_id: self.enrollment_id,
            lesson_id: self.lesson_id,
            enrollment,
            lesson,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a progress log.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProgressLog {
    /// The enrollment the progress belongs to.
    #[validate(range(min = 1, message = "enrollment_id must be positive"))]
    pub enrollment_id: i64,
    /// The completed lesson.
    #[validate(range(min = 1, message = "lesson_id must be positive"))]
    pub lesson_id: i64,
    /// When the lesson was completed (defaults to now).
    pub completed_at: Option<DateTime<Utc>>,
}

/// Request payload for updating a progress log. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProgressLog {
    /// New enrollment id.
    #[validate(range(min = 1, message = "enrollment_id must be positive"))]
    pub enrollment_id: Option<i64>,
    /// New lesson id.
    #[validate(range(min = 1, message = "lesson_id must be positive"))]
    pub lesson_id: Option<i64>,
    /// New completion time.
    pub completed_at: Option<DateTime<Utc>>,
}

/// API response for a progress log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressLogResponse {
    /// Primary key.
    pub id: i64,
    /// When the lesson was completed.
    pub completed_at: DateTime<Utc>,
    /// The enrollment the progress belongs to.
    pub enrollment_id: i64,
    /// The completed lesson.
    pub lesson_id: i64,
    /// Enrollment summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<SelectOption>,
    /// Lesson summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<SelectOption>,
    /// When the log was created.
    pub created_at: DateTime<Utc>,
    /// When the log was last updated.
    pub updated_at: DateTime<Utc>,
}
