//! The `{id, name}` projection used for dropdowns and embedded summaries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A minimal `{id, name}` projection of an entity.
///
/// Used both to populate UI select boxes (the `GET <path>/all` endpoints)
/// and as the embedded summary of a related row in detail responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SelectOption {
    /// The entity's primary key.
    pub id: i64,
    /// Human-readable display name.
    pub name: String,
}

impl SelectOption {
    /// Create a new select option.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
