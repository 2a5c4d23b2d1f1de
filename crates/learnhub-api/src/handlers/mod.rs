//! Request handlers, one module per entity.

pub mod category;
pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod health;
pub mod lesson;
pub mod payment;
pub mod progress_log;
pub mod resource;
pub mod review;
pub mod tag;
pub mod tag_relation;
