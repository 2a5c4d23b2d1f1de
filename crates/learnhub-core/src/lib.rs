//! # learnhub-core
//!
//! Core crate for LearnHub. Contains configuration schemas, domain events,
//! pagination/sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LearnHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
