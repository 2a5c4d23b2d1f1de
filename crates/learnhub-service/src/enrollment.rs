//! Enrollment business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CourseRepository, EnrollmentRepository};
use learnhub_entity::enrollment::{CreateEnrollment, EnrollmentResponse, UpdateEnrollment};

use crate::ensure_id;

/// Handles enrollment CRUD operations.
#[derive(Debug, Clone)]
pub struct EnrollmentService {
    enrollments: Arc<EnrollmentRepository>,
    /// Course repository, for referential checks and summaries.
    courses: Arc<CourseRepository>,
    events: EventBus,
}

impl EnrollmentService {
    /// Create a new enrollment service.
    pub fn new(
        enrollments: Arc<EnrollmentRepository>,
        courses: Arc<CourseRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            enrollments,
            courses,
            events,
        }
    }

    /// List enrollments with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<EnrollmentResponse>> {
        let enrollments = self.enrollments.find_all(page, sort).await?;
        Ok(enrollments.map(|enrollment| enrollment.into_response(None)))
    }

    /// List all enrollments as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.enrollments.find_all_for_select().await
    }

    /// Get a single enrollment with its course summary resolved.
    pub async fn get(&self, id: i64) -> AppResult<EnrollmentResponse> {
        ensure_id(id)?;
        let enrollment = self
            .enrollments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Enrollment {id} not found")))?;
        let course = self.course_summary(enrollment.course_id).await?;
        Ok(enrollment.into_response(course))
    }

    /// Create an enrollment after checking that the referenced course exists.
    pub async fn create(&self, data: CreateEnrollment) -> AppResult<EnrollmentResponse> {
        self.ensure_course_exists(data.course_id).await?;

        let enrollment = self.enrollments.create(&data).await?;
        info!(
            enrollment_id = enrollment.id,
            student_id = enrollment.student_id,
            course_id = enrollment.course_id,
            "Enrollment created"
        );
        self.events.publish(DomainEvent::new(
            Entity::Enrollment,
            EventAction::Create,
            enrollment.id,
        ));

        let course = self.course_summary(enrollment.course_id).await?;
        Ok(enrollment.into_response(course))
    }

    /// Partially update an enrollment.
    pub async fn update(&self, id: i64, data: UpdateEnrollment) -> AppResult<EnrollmentResponse> {
        ensure_id(id)?;
        if let Some(course_id) = data.course_id {
            self.ensure_course_exists(course_id).await?;
        }

        let enrollment = self.enrollments.update(id, &data).await?;
        info!(enrollment_id = enrollment.id, "Enrollment updated");
        self.events.publish(DomainEvent::new(
            Entity::Enrollment,
            EventAction::Update,
            enrollment.id,
        ));

        let course = self.course_summary(enrollment.course_id).await?;
        Ok(enrollment.into_response(course))
    }

    /// Soft-delete an enrollment.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.enrollments.soft_delete(id).await?;
        info!(enrollment_id = id, "Enrollment deleted");
        self.events
            .publish(DomainEvent::new(Entity::Enrollment, EventAction::Delete, id));
        Ok(())
    }

    async fn ensure_course_exists(&self, course_id: i64) -> AppResult<()> {
        ensure_id(course_id)?;
        if !self.courses.exists(course_id).await? {
            return Err(AppError::validation(format!(
                "Course {course_id} does not exist"
            )));
        }
        Ok(())
    }

    async fn course_summary(&self, course_id: i64) -> AppResult<Option<SelectOption>> {
        Ok(self
            .courses
            .find_by_id(course_id)
            .await?
            .map(|course| course.to_select_option()))
    }
}
