//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A student's review of a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Primary key.
    pub id: i64,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Free-text comment.
    pub comment: Option<String>,
    /// The reviewed course.
    pub course_id: i64,
    /// The reviewing student's user id (platform identity service).
    pub student_id: i64,
    /// When the review was created.
    pub created_at: DateTime<Utc>,
    /// When the review was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Human-readable display name. Reviews have no natural name field,
    /// so fall back to an id-based label.
    pub fn display_name(&self) -> String {
        format!("Review #{}", self.id)
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved course
    /// summary when available.
    pub fn into_response(self, course: Option<SelectOption>) -> ReviewResponse {
        ReviewResponse {
            id: self.id,
            rating: self.rating,
            comment: self.comment,
            course_id: self.course_id,
            student_id: self.student_id,
            course,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a review.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReview {
    /// The reviewed course.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: i64,
    /// The reviewing student's user id.
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: i64,
    /// Star rating, 1 to 5.
    #[validate(range(min = 1, max = 5, message = "rating must be 1-5"))]
    pub rating: i32,
    /// Free-text comment.
    pub comment: Option<String>,
}

/// Request payload for updating a review. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateReview {
    /// New course id.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: Option<i64>,
    /// New student id.
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: Option<i64>,
    /// New rating.
    #[validate(range(min = 1, max = 5, message = "rating must be 1-5"))]
    pub rating: Option<i32>,
    /// New comment.
    pub comment: Option<String>,
}

/// API response for a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Primary key.
    pub id: i64,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Free-text comment.
    pub comment: Option<String>,
    /// The reviewed course.
    pub course_id: i64,
    /// The reviewing student's user id.
    pub student_id: i64,
    /// Course summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<SelectOption>,
    /// When the review was created.
    pub created_at: DateTime<Utc>,
    /// When the review was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_rating_bounds() {
        let mut req = CreateReview {
            course_id: 1,
            student_id: 1,
            rating: 5,
            comment: None,
        };
        assert!(req.validate().is_ok());

        req.rating = 0;
        assert!(req.validate().is_err());

        req.rating = 6;
        assert!(req.validate().is_err());
    }
}
