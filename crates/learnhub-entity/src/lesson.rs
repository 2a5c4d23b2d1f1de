//! Lesson entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A single lesson within a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lesson {
    /// Primary key.
    pub id: i64,
    /// Lesson title.
    pub title: String,
    /// Lesson body content (markdown).
    pub content: Option<String>,
    /// Video URL, if the lesson has one.
    pub video_url: Option<String>,
    /// Duration in minutes.
    pub duration: i32,
    /// Position of the lesson within its course.
    pub order_number: i32,
    /// The course this lesson belongs to.
    pub course_id: i64,
    /// When the lesson was created.
    pub created_at: DateTime<Utc>,
    /// When the lesson was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Lesson {
    /// Human-readable display name.
    pub fn display_name(&self) -> String {
        self.title.clone()
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved course
    /// summary when available.
    pub fn into_response(self, course: Option<SelectOption>) -> LessonResponse {
        LessonResponse {
            id: self.id,
            title: self.title,
            content: self.content,
            video_url: self.video_url,
            duration: self.duration,
            order_number: self.order_number,
            course_id: self.course_id,
            course,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLesson {
    /// Lesson title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    /// Lesson body content.
    pub content: Option<String>,
    /// Video URL.
    pub video_url: Option<String>,
    /// Duration in minutes.
    #[validate(range(min = 0, message = "duration cannot be negative"))]
    pub duration: i32,
    /// Position within the course.
    #[validate(range(min = 0, message = "order_number cannot be negative"))]
    pub order_number: i32,
    /// The course this lesson belongs to.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: i64,
}

/// Request payload for updating a lesson. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLesson {
    /// New title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// New video URL.
    pub video_url: Option<String>,
    /// New duration in minutes.
    #[validate(range(min = 0, message = "duration cannot be negative"))]
    pub duration: Option<i32>,
    /// New position within the course.
    #[validate(range(min = 0, message = "order_number cannot be negative"))]
    pub order_number: Option<i32>,
    /// New course id.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: Option<i64>,
}

/// API response for a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonResponse {
    /// Primary key.
    pub id: i64,
    /// Lesson title.
    pub title: String,
    /// Lesson body content.
    pub content: Option<String>,
    /// Video URL.
    pub video_url: Option<String>,
    /// Duration in minutes.
    pub duration: i32,
    /// Position within the course.
    pub order_number: i32,
    /// The course this lesson belongs to.
    pub course_id: i64,
    /// Course summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<SelectOption>,
    /// When the lesson was created.
    pub created_at: DateTime<Utc>,
    /// When the lesson was last updated.
    pub updated_at: DateTime<Utc>,
}
