//! Course entity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::AppError;
use learnhub_core::types::SelectOption;

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "course_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    /// No prior knowledge assumed.
    Beginner,
    /// Some prior knowledge assumed.
    Intermediate,
    /// Aimed at experienced students.
    Advanced,
}

impl CourseLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(AppError::validation(format!(
                "Invalid course level: '{s}'. Expected one of: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// Publication status of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "course_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Not yet visible to students.
    Draft,
    /// Open for enrollment.
    Published,
    /// No longer open for enrollment.
    Archived,
}

impl CourseStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourseStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(AppError::validation(format!(
                "Invalid course status: '{s}'. Expected one of: draft, published, archived"
            ))),
        }
    }
}

/// A course offered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Primary key.
    pub id: i64,
    /// Course title.
    pub title: String,
    /// URL-friendly unique identifier.
    pub slug: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Price in cents.
    pub price: i32,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Course language code (e.g. `"en"`).
    pub language: String,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Publication status.
    pub status: CourseStatus,
    /// Total duration in minutes.
    pub duration: i32,
    /// Instructor's user id (platform identity service).
    pub instructor_id: i64,
    /// Optional category.
    pub category_id: Option<i64>,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Human-readable display name.
    pub fn display_name(&self) -> String {
        self.title.clone()
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved category
    /// summary when available.
    pub fn into_response(self, category: Option<SelectOption>) -> CourseResponse {
        CourseResponse {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            price: self.price,
            level: self.level,
            language: self.language,
            thumbnail_url: self.thumbnail_url,
            status: self.status,
            duration: self.duration,
            instructor_id: self.instructor_id,
            category_id: self.category_id,
            category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a course.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourse {
    /// Course title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    /// URL-friendly unique identifier.
    #[validate(length(min = 1, max = 200, message = "slug must be 1-200 characters"))]
    pub slug: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Price in cents.
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: i32,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Course language code.
    #[validate(length(min = 1, max = 16, message = "language must be 1-16 characters"))]
    pub language: String,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Publication status.
    pub status: CourseStatus,
    /// Total duration in minutes.
    #[validate(range(min = 0, message = "duration cannot be negative"))]
    pub duration: i32,
    /// Instructor's user id.
    #[validate(range(min = 1, message = "instructor_id must be positive"))]
    pub instructor_id: i64,
    /// Optional category id.
    pub category_id: Option<i64>,
}

/// Request payload for updating a course. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCourse {
    /// New title.
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    /// New slug.
    #[validate(length(min = 1, max = 200, message = "slug must be 1-200 characters"))]
    pub slug: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price in cents.
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: Option<i32>,
    /// New difficulty level.
    pub level: Option<CourseLevel>,
    /// New language code.
    pub language: Option<String>,
    /// New thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// New publication status.
    pub status: Option<CourseStatus>,
    /// New duration in minutes.
    #[validate(range(min = 0, message = "duration cannot be negative"))]
    pub duration: Option<i32>,
    /// New instructor id.
    #[validate(range(min = 1, message = "instructor_id must be positive"))]
    pub instructor_id: Option<i64>,
    /// New category id.
    pub category_id: Option<i64>,
}

/// API response for a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    /// Primary key.
    pub id: i64,
    /// Course title.
    pub title: String,
    /// URL-friendly unique identifier.
    pub slug: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Price in cents.
    pub price: i32,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Course language code.
    pub language: String,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Publication status.
    pub status: CourseStatus,
    /// Total duration in minutes.
    pub duration: i32,
    /// Instructor's user id.
    pub instructor_id: i64,
    /// Category id, if assigned.
    pub category_id: Option<i64>,
    /// Category summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SelectOption>,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sample_course() -> Course {
        Course {
            id: 1,
            title: "Rust for Backend Engineers".to_string(),
            slug: "rust-for-backend-engineers".to_string(),
            description: None,
            price: 4999,
            level: CourseLevel::Intermediate,
            language: "en".to_string(),
            thumbnail_url: None,
            status: CourseStatus::Published,
            duration: 540,
            instructor_id: 10,
            category_id: Some(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!(
            "beginner".parse::<CourseLevel>().unwrap(),
            CourseLevel::Beginner
        );
        assert_eq!(
            "ADVANCED".parse::<CourseLevel>().unwrap(),
            CourseLevel::Advanced
        );
        assert!("expert".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn test_status_serde_is_lowercase() {
        let json = serde_json::to_string(&CourseStatus::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
    }

    #[test]
    fn test_select_option_uses_title() {
        let option = sample_course().to_select_option();
        assert_eq!(option.id, 1);
        assert_eq!(option.name, "Rust for Backend Engineers");
    }

    #[test]
    fn test_list_response_skips_absent_category() {
        let response = sample_course().into_response(None);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("category").is_none());
        assert_eq!(json["category_id"], 2);
    }

    #[test]
    fn test_create_request_rejects_empty_title() {
        let req = CreateCourse {
            title: String::new(),
            slug: "x".to_string(),
            description: None,
            price: 0,
            level: CourseLevel::Beginner,
            language: "en".to_string(),
            thumbnail_url: None,
            status: CourseStatus::Draft,
            duration: 0,
            instructor_id: 1,
            category_id: None,
        };
        assert!(req.validate().is_err());
    }
}
