//! # learnhub-entity
//!
//! Domain entity models for LearnHub. Every entity module contains the
//! database row struct (deriving `sqlx::FromRow`), the create/update
//! request DTOs (deriving `validator::Validate`), the API response DTO,
//! and the conversion methods between them.

pub mod category;
pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod payment;
pub mod progress_log;
pub mod resource;
pub mod review;
pub mod tag;
pub mod tag_relation;

pub use category::{Category, CategoryResponse, CreateCategory, UpdateCategory};
pub use certificate::{Certificate, CertificateResponse, CreateCertificate, UpdateCertificate};
pub use course::{Course, CourseLevel, CourseResponse, CourseStatus, CreateCourse, UpdateCourse};
pub use enrollment::{CreateEnrollment, Enrollment, EnrollmentResponse, UpdateEnrollment};
pub use lesson::{CreateLesson, Lesson, LessonResponse, UpdateLesson};
pub use payment::{CreatePayment, Payment, PaymentMethod, PaymentResponse, PaymentStatus, UpdatePayment};
pub use progress_log::{CreateProgressLog, ProgressLog, ProgressLogResponse, UpdateProgressLog};
pub use resource::{CreateResource, Resource, ResourceResponse, UpdateResource};
pub use review::{CreateReview, Review, ReviewResponse, UpdateReview};
pub use tag::{CreateTag, Tag, TagResponse, UpdateTag};
pub use tag_relation::{CreateTagRelation, TagRelation, TagRelationResponse, UpdateTagRelation};
