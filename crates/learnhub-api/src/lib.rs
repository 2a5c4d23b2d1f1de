//! # learnhub-api
//!
//! HTTP API layer for LearnHub, built on Axum. Contains the router,
//! request handlers, query-parameter extractors, response DTOs, and the
//! mapping from domain errors to HTTP status codes.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
