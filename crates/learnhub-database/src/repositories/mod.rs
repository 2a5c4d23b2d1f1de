//! Concrete repository implementations, one per entity.
//!
//! Every repository follows the same shape: `find_by_id`, `find_all`
//! (paginated, whitelist-sorted), `find_all_for_select` (the `{id, name}`
//! dropdown projection), `create`, `update` (partial, via `COALESCE`), and
//! `soft_delete`. Entities referenced by foreign keys also expose `exists`.

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

pub use category::CategoryRepository;
pub use certificate::CertificateRepository;
pub use course::CourseRepository;
pub use enrollment::EnrollmentRepository;
pub use lesson::LessonRepository;
pub use payment::PaymentRepository;
pub use progress_log::ProgressLogRepository;
pub use resource::ResourceRepository;
pub use review::ReviewRepository;
pub use tag::TagRepository;
pub use tag_relation::TagRelationRepository;
