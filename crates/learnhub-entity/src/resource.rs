//! Course resource entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A downloadable resource attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Primary key.
    pub id: i64,
    /// Resource title.
    pub title: String,
    /// URL of the uploaded file.
    pub file_url: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// The owning course.
    pub course_id: i64,
    /// When the resource was created.
    pub created_at: DateTime<Utc>,
    /// When the resource was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource {
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
    pub fn into_response(self, course: Option<SelectOption>) -> ResourceResponse {
        ResourceResponse {
            id: self.id,
            title: self.title,
            file_url: self.file_url,
            uploaded_at: self.uploaded_at,
            course_id: self.course_id,
            course,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a resource.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResource {
    /// The owning course.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: i64,
    /// Resource title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    /// URL of the uploaded file.
    #[validate(length(min = 1, message = "file_url cannot be empty"))]
    pub file_url: String,
    /// When the file was uploaded (defaults to now).
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Request payload for updating a resource. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateResource {
    /// New course id.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: Option<i64>,
    /// New title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    /// New file URL.
    #[validate(length(min = 1, message = "file_url cannot be empty"))]
    pub file_url: Option<String>,
    /// New upload time.
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// API response for a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    /// Primary key.
    pub id: i64,
    /// Resource title.
    pub title: String,
    /// URL of the uploaded file.
    pub file_url: String,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// The owning course.
    pub course_id: i64,
    /// Course summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<SelectOption>,
    /// When the resource was created.
    pub created_at: DateTime<Utc>,
    /// When the resource was last updated.
    pub updated_at: DateTime<Utc>,
}
