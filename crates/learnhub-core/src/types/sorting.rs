//! Sorting types for list endpoints.
//!
//! Every repository exposes a whitelist of sortable columns; the requested
//! sort is resolved against that whitelist before being interpolated into
//! an `ORDER BY` clause, so user input never reaches the SQL text directly.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Desc
    }
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A sort specification consisting of a field name and direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortField {
    /// Column or field name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Resolve a requested sort into a safe `ORDER BY` clause body.
///
/// A requested field not present in `allowed` falls back to
/// `default_column`; a missing sort entirely falls back to
/// `default_column DESC`. Only whitelisted column names are ever
/// interpolated.
pub fn order_by_clause(allowed: &[&str], sort: Option<&SortField>, default_column: &str) -> String {
    match sort {
        Some(sort) => {
            let column = if allowed.contains(&sort.field.as_str()) {
                sort.field.as_str()
            } else {
                default_column
            };
            format!("{} {}", column, sort.direction.as_sql())
        }
        None => format!("{} {}", default_column, SortDirection::Desc.as_sql()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["id", "created_at", "title"];

    #[test]
    fn test_allowed_field_is_used() {
        let sort = SortField::asc("title");
        assert_eq!(order_by_clause(ALLOWED, Some(&sort), "id"), "title ASC");
    }

    #[test]
    fn test_unknown_field_falls_back_to_default() {
        let sort = SortField::asc("password; DROP TABLE courses");
        assert_eq!(order_by_clause(ALLOWED, Some(&sort), "id"), "id ASC");
    }

    #[test]
    fn test_missing_sort_defaults_to_id_desc() {
        assert_eq!(order_by_clause(ALLOWED, None, "id"), "id DESC");
    }
}
