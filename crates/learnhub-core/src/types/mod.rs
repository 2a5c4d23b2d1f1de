//! Core type definitions used across the LearnHub workspace.

pub mod pagination;
pub mod select;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse};
pub use select::SelectOption;
pub use sorting::{SortDirection, SortField, order_by_clause};
