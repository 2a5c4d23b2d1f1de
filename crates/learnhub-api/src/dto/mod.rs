//! Request and response DTOs shared across handlers.

pub mod response;
