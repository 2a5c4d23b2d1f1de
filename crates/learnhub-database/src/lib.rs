//! # learnhub-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all LearnHub entities. Every read filters out
//! soft-deleted rows; deletes only ever set `deleted_at`.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
