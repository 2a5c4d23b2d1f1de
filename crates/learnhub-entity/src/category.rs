//! Course category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A category grouping related courses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Primary key.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// URL-friendly unique identifier.
    pub slug: String,
    /// Long-form description.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Human-readable display name.
    pub fn display_name(&self) -> String {
        self.name.clone()
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API response.
    pub fn into_response(self) -> CategoryResponse {
        CategoryResponse {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategory {
    /// Category name.
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub name: String,
    /// URL-friendly unique identifier.
    #[validate(length(min = 1, max = 120, message = "slug must be 1-120 characters"))]
    pub slug: String,
    /// Long-form description.
    pub description: Option<String>,
}

/// Request payload for updating a category. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategory {
    /// New name.
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub name: Option<String>,
    /// New slug.
    #[validate(length(min = 1, max = 120, message = "slug must be 1-120 characters"))]
    pub slug: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// API response for a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Primary key.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// URL-friendly unique identifier.
    pub slug: String,
    /// Long-form description.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}
