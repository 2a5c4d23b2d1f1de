//! Course-to-tag relation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A join row attaching a tag to a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TagRelation {
    /// Primary key.
    pub id: i64,
    /// The tagged course.
    pub course_id: i64,
    /// The attached tag.
    pub tag_id: i64,
    /// When the relation was created.
    pub created_at: DateTime<Utc>,
    /// When the relation was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TagRelation {
    /// Human-readable display name. Relations have no natural name field,
    /// so fall back to an id-based label.
    pub fn display_name(&self) -> String {
        format!("Relation #{}", self.id)
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved course
    /// and tag summaries when available.
    pub fn into_response(
        self,
        course: Option<SelectOption>,
        tag: Option<SelectOption>,
    ) -> TagRelationResponse {
        TagRelationResponse {
            id: self.id,
            course_id: self.course_id,
            tag_id: self.tag_id,
            course,
            tag,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a tag relation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTagRelation {
    /// The course to tag.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: i64,
    /// The tag to attach.
    #[validate(range(min = 1, message = "tag_id must be positive"))]
    pub tag_id: i64,
}

/// Request payload for updating a tag relation. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTagRelation {
    /// New course id.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: Option<i64>,
    /// New tag id.
    #[validate(range(min = 1, message = "tag_id must be positive"))]
    pub tag_id: Option<i64>,
}

/// API response for a tag relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRelationResponse {
    /// Primary key.
    pub id: i64,
    /// The tagged course.
    pub course_id: i64,
    /// The attached tag.
    pub tag_id: i64,
    /// Course summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<SelectOption>,
    /// Tag summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<SelectOption>,
    /// When the relation was created.
    pub created_at: DateTime<Utc>,
    /// When the relation was last updated.
    pub updated_at: DateTime<Utc>,
}
