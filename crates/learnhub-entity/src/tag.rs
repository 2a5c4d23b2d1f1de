//! Course tag entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A free-form tag attachable to courses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    /// Primary key.
    pub id: i64,
    /// Tag name.
    pub name: String,
    /// When the tag was created.
    pub created_at: DateTime<Utc>,
    /// When the tag was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Tag {
    /// Human-readable display name.
    pub fn display_name(&self) -> String {
        self.name.clone()
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API response.
    pub fn into_response(self) -> TagResponse {
        TagResponse {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTag {
    /// Tag name.
    #[validate(length(min = 1, max = 80, message = "name must be 1-80 characters"))]
    pub name: String,
}

/// Request payload for updating a tag. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTag {
    /// New name.
    #[validate(length(min = 1, max = 80, message = "name must be 1-80 characters"))]
    pub name: Option<String>,
}

/// API response for a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    /// Primary key.
    pub id: i64,
    /// Tag name.
    pub name: String,
    /// When the tag was created.
    pub created_at: DateTime<Utc>,
    /// When the tag was last updated.
    pub updated_at: DateTime<Utc>,
}
