//! Course progress log business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{
    EnrollmentRepository, LessonRepository, ProgressLogRepository,
};
use learnhub_entity::progress_log::{CreateProgressLog, ProgressLogResponse, UpdateProgressLog};

use crate::ensure_id;

/// Handles progress log CRUD operations.
#[derive(Debug, Clone)]
pub struct ProgressLogService {
    logs: Arc<ProgressLogRepository>,
    /// Enrollment repository, for referential checks and summaries.
    enrollments: Arc<EnrollmentRepository>,
    /// Lesson repository, for referential checks and summaries.
    lessons: Arc<LessonRepository>,
    events: EventBus,
}

impl ProgressLogService {
    /// Create a new progress log service.
    pub fn new(
        logs: Arc<ProgressLogRepository>,
        enrollments: Arc<EnrollmentRepository>,
        lessons: Arc<LessonRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            logs,
            enrollments,
            lessons,
            events,
        }
    }

    /// List progress logs with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<ProgressLogResponse>> {
        let logs = self.logs.find_all(page, sort).await?;
        Ok(logs.map(|log| log.into_response(None, None)))
    }

    /// List all progress logs as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.logs.find_all_for_select().await
    }

    /// Get a single progress log with its enrollment and lesson summaries
    /// resolved.
    pub async fn get(&self, id: i64) -> AppResult<ProgressLogResponse> {
        ensure_id(id)?;
        let log = self
            .logs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Progress log {id} not found")))?;
        let enrollment = self.enrollment_summary(log.enrollment_id).await?;
        let lesson = self.lesson_summary(log.lesson_id).await?;
        Ok(log.into_response(enrollment, lesson))
    }

    /// Create a progress log after checking that both referenced rows exist.
    pub async fn create(&self, data: CreateProgressLog) -> AppResult<ProgressLogResponse> {
        self.ensure_enrollment_exists(data.enrollment_id).await?;
        self.ensure_lesson_exists(data.lesson_id).await?;

        let log = self.logs.create(&data).await?;
        info!(
            progress_log_id = log.id,
            enrollment_id = log.enrollment_id,
            lesson_id = log.lesson_id,
            "Progress log created"
        );
        self.events.publish(DomainEvent::new(
            Entity::ProgressLog,
            EventAction::Create,
            log.id,
        ));

        let enrollment = self.enrollment_summary(log.enrollment_id).await?;
        let lesson = self.lesson_summary(log.lesson_id).await?;
        Ok(log.into_response(enrollment, lesson))
    }

    /// Partially update a progress log.
    pub async fn update(&self, id: i64, data: UpdateProgressLog) -> AppResult<ProgressLogResponse> {
        ensure_id(id)?;
        if let Some(enrollment_id) = data.enrollment_id {
            self.ensure_enrollment_exists(enrollment_id).await?;
        }
        if let Some(lesson_id) = data.lesson_id {
            self.ensure_lesson_exists(lesson_id).await?;
        }

        let log = self.logs.update(id, &data).await?;
        info!(progress_log_id = log.id, "Progress log updated");
        self.events.publish(DomainEvent::new(
            Entity::ProgressLog,
            EventAction::Update,
            log.id,
        ));

        let enrollment = self.enrollment_summary(log.enrollment_id).await?;
        let lesson = self.lesson_summary(log.lesson_id).await?;
        Ok(log.into_response(enrollment, lesson))
    }

    /// Soft-delete a progress log.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.logs.soft_delete(id).await?;
        info!(progress_log_id = id, "Progress log deleted");
        self.events
            .publish(DomainEvent::new(Entity::ProgressLog, EventAction::Delete, id));
        Ok(())
    }

    async fn ensure_enrollment_exists(&self, enrollment_id: i64) -> AppResult<()> {
        ensure_id(enrollment_id)?;
        if !self.enrollments.exists(enrollment_id).await? {
            return Err(AppError::validation(format!(
                "Enrollment {enrollment_id} does not exist"
            )));
        }
        Ok(())
    }

    async fn ensure_lesson_exists(&self, lesson_id: i64) -> AppResult<()> {
        ensure_id(lesson_id)?;
        if !self.lessons.exists(lesson_id).await? {
            return Err(AppError::validation(format!(
                "Lesson {lesson_id} does not exist"
            )));
        }
        Ok(())
    }

    async fn enrollment_summary(&self, enrollment_id: i64) -> AppResult<Option<SelectOption>> {
        Ok(self
            .enrollments
            .find_by_id(enrollment_id)
            .await?
            .map(|enrollment| enrollment.to_select_option()))
    }

    async fn lesson_summary(&self, lesson_id: i64) -> AppResult<Option<SelectOption>> {
        Ok(self
            .lessons
            .find_by_id(lesson_id)
            .await?
            .map(|lesson| lesson.to_select_option()))
    }
}
