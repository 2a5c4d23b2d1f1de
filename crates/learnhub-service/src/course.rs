//! Course business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CategoryRepository, CourseRepository};
use learnhub_entity::course::{CourseResponse, CreateCourse, UpdateCourse};

use crate::ensure_id;

/// Handles course CRUD operations.
#[derive(Debug, Clone)]
pub struct CourseService {
    /// Course repository.
    courses: Arc<CourseRepository>,
    /// Category repository, for referential checks and summaries.
    categories: Arc<CategoryRepository>,
    /// Domain event bus.
    events: EventBus,
}

impl CourseService {
    /// Create a new course service.
    pub fn new(
        courses: Arc<CourseRepository>,
        categories: Arc<CategoryRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            courses,
            categories,
            events,
        }
    }

    /// List courses with pagination and sorting. List rows omit the
    /// embedded category summary.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<CourseResponse>> {
        let courses = self.courses.find_all(page, sort).await?;
        Ok(courses.map(|course| course.into_response(None)))
    }

    /// List all courses as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.courses.find_all_for_select().await
    }

    /// Get a single course with its category summary resolved.
    pub async fn get(&self, id: i64) -> AppResult<CourseResponse> {
        ensure_id(id)?;
        let course = self
            .courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course {id} not found")))?;
        let category = self.category_summary(course.category_id).await?;
        Ok(course.into_response(category))
    }

    /// Create a course after checking that the referenced category exists.
    pub async fn create(&self, data: CreateCourse) -> AppResult<CourseResponse> {
        if let Some(category_id) = data.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        let course = self.courses.create(&data).await?;
        info!(course_id = course.id, title = %course.title, "Course created");
        self.events
            .publish(DomainEvent::new(Entity::Course, EventAction::Create, course.id));

        let category = self.category_summary(course.category_id).await?;
        Ok(course.into_response(category))
    }

    /// Partially update a course.
    pub async fn update(&self, id: i64, data: UpdateCourse) -> AppResult<CourseResponse> {
        ensure_id(id)?;
        if let Some(category_id) = data.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        let course = self.courses.update(id, &data).await?;
        info!(course_id = course.id, "Course updated");
        self.events
            .publish(DomainEvent::new(Entity::Course, EventAction::Update, course.id));

        let category = self.category_summary(course.category_id).await?;
        Ok(course.into_response(category))
    }

    /// Soft-delete a course.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.courses.soft_delete(id).await?;
        info!(course_id = id, "Course deleted");
        self.events
            .publish(DomainEvent::new(Entity::Course, EventAction::Delete, id));
        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: i64) -> AppResult<()> {
        ensure_id(category_id)?;
        if !self.categories.exists(category_id).await? {
            return Err(AppError::validation(format!(
                "Category {category_id} does not exist"
            )));
        }
        Ok(())
    }

    /// Resolve the category summary for a detail response. A missing
    /// (soft-deleted) category is simply omitted.
    async fn category_summary(&self, category_id: Option<i64>) -> AppResult<Option<SelectOption>> {
        match category_id {
            Some(id) => Ok(self
                .categories
                .find_by_id(id)
                .await?
                .map(|category| category.to_select_option())),
            None => Ok(None),
        }
    }
}
