//! Course resource business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CourseRepository, ResourceRepository};
use learnhub_entity::resource::{CreateResource, ResourceResponse, UpdateResource};

use crate::ensure_id;

/// Handles resource CRUD operations.
#[derive(Debug, Clone)]
pub struct ResourceService {
    resources: Arc<ResourceRepository>,
    /// Course repository, for referential checks and summaries.
    courses: Arc<CourseRepository>,
    events: EventBus,
}

impl ResourceService {
    /// Create a new resource service.
    pub fn new(
        resources: Arc<ResourceRepository>,
        courses: Arc<CourseRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            resources,
            courses,
            events,
        }
    }

    /// List resources with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<ResourceResponse>> {
        let resources = self.resources.find_all(page, sort).await?;
        Ok(resources.map(|resource| resource.into_response(None)))
    }

    /// List all resources as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.resources.find_all_for_select().await
    }

    /// Get a single resource with its course summary resolved.
    pub async fn get(&self, id: i64) -> AppResult<ResourceResponse> {
        ensure_id(id)?;
        let resource = self
            .resources
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))?;
        let course = self.course_summary(resource.course_id).await?;
        Ok(resource.into_response(course))
    }

    /// Create a resource after checking that the referenced course exists.
    pub async fn create(&self, data: CreateResource) -> AppResult<ResourceResponse> {
        self.ensure_course_exists(data.course_id).await?;

        let resource = self.resources.create(&data).await?;
        info!(resource_id = resource.id, title = %resource.title, "Resource created");
        self.events.publish(DomainEvent::new(
            Entity::Resource,
            EventAction::Create,
            resource.id,
        ));

        let course = self.course_summary(resource.course_id).await?;
        Ok(resource.into_response(course))
    }

    /// Partially update a resource.
    pub async fn update(&self, id: i64, data: UpdateResource) -> AppResult<ResourceResponse> {
        ensure_id(id)?;
        if let Some(course_id) = data.course_id {
            self.ensure_course_exists(course_id).await?;
        }

        let resource = self.resources.update(id, &data).await?;
        info!(resource_id = resource.id, "Resource updated");
        self.events.publish(DomainEvent::new(
            Entity::Resource,
            EventAction::Update,
            resource.id,
        ));

        let course = self.course_summary(resource.course_id).await?;
        Ok(resource.into_response(course))
    }

    /// Soft-delete a resource.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.resources.soft_delete(id).await?;
        info!(resource_id = id, "Resource deleted");
        self.events
            .publish(DomainEvent::new(Entity::Resource, EventAction::Delete, id));
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
