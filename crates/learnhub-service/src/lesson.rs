//! Lesson business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CourseRepository, LessonRepository};
use learnhub_entity::lesson::{CreateLesson, LessonResponse, UpdateLesson};

use crate::ensure_id;

/// Handles lesson CRUD operations.
#[derive(Debug, Clone)]
pub struct LessonService {
    lessons: Arc<LessonRepository>,
    /// Course repository, for referential checks and summaries.
    courses: Arc<CourseRepository>,
    events: EventBus,
}

impl LessonService {
    /// Create a new lesson service.
    pub fn new(
        lessons: Arc<LessonRepository>,
        courses: Arc<CourseRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            lessons,
            courses,
            events,
        }
    }

    /// List lessons with pagination and sorting. List rows omit the
    /// embedded course summary.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<LessonResponse>> {
        let lessons = self.lessons.find_all(page, sort).await?;
        Ok(lessons.map(|lesson| lesson.into_response(None)))
    }

    /// List all lessons as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.lessons.find_all_for_select().await
    }

    /// Get a single lesson with its course summary resolved.
    pub async fn get(&self, id: i64) -> AppResult<LessonResponse> {
        ensure_id(id)?;
        let lesson = self
            .lessons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Lesson {id} not found")))?;
        let course = self.course_summary(lesson.course_id).await?;
        Ok(lesson.into_response(course))
    }

    /// Create a lesson after checking that the referenced course exists.
    pub async fn create(&self, data: CreateLesson) -> AppResult<LessonResponse> {
        self.ensure_course_exists(data.course_id).await?;

        let lesson = self.lessons.create(&data).await?;
        info!(lesson_id = lesson.id, title = %lesson.title, "Lesson created");
        self.events
            .publish(DomainEvent::new(Entity::Lesson, EventAction::Create, lesson.id));

        let course = self.course_summary(lesson.course_id).await?;
        Ok(lesson.into_response(course))
    }

    /// Partially update a lesson.
    pub async fn update(&self, id: i64, data: UpdateLesson) -> AppResult<LessonResponse> {
        ensure_id(id)?;
        if let Some(course_id) = data.course_id {
            self.ensure_course_exists(course_id).await?;
        }

        let lesson = self.lessons.update(id, &data).await?;
        info!(lesson_id = lesson.id, "Lesson updated");
        self.events
            .publish(DomainEvent::new(Entity::Lesson, EventAction::Update, lesson.id));

        let course = self.course_summary(lesson.course_id).await?;
        Ok(lesson.into_response(course))
    }

    /// Soft-delete a lesson.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.lessons.soft_delete(id).await?;
        info!(lesson_id = id, "Lesson deleted");
        self.events
            .publish(DomainEvent::new(Entity::Lesson, EventAction::Delete, id));
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
