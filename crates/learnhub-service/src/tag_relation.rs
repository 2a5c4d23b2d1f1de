//! Course-to-tag relation business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CourseRepository, TagRelationRepository, TagRepository};
use learnhub_entity::tag_relation::{CreateTagRelation, TagRelationResponse, UpdateTagRelation};

use crate::ensure_id;

/// Handles tag relation CRUD operations.
#[derive(Debug, Clone)]
pub struct TagRelationService {
    relations: Arc<TagRelationRepository>,
    /// Course repository, for referential checks and summaries.
    courses: Arc<CourseRepository>,
    /// Tag repository, for referential checks and summaries.
    tags: Arc<TagRepository>,
    events: EventBus,
}

impl TagRelationService {
    /// Create a new tag relation service.
    pub fn new(
        relations: Arc<TagRelationRepository>,
        courses: Arc<CourseRepository>,
        tags: Arc<TagRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            relations,
            courses,
            tags,
            events,
        }
    }

    /// List tag relations with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<TagRelationResponse>> {
        let relations = self.relations.find_all(page, sort).await?;
        Ok(relations.map(|relation| relation.into_response(None, None)))
    }

    /// List all tag relations as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.relations.find_all_for_select().await
    }

    /// Get a single tag relation with its course and tag summaries resolved.
    pub async fn get(&self, id: i64) -> AppResult<TagRelationResponse> {
        ensure_id(id)?;
        let relation = self
            .relations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tag relation {id} not found")))?;
        let course = self.course_summary(relation.course_id).await?;
        let tag = self.tag_summary(relation.tag_id).await?;
        Ok(relation.into_response(course, tag))
    }

    /// Create a tag relation after checking that both referenced rows exist.
    pub async fn create(&self, data: CreateTagRelation) -> AppResult<TagRelationResponse> {
        self.ensure_course_exists(data.course_id).await?;
        self.ensure_tag_exists(data.tag_id).await?;

        let relation = self.relations.create(&data).await?;
        info!(
            relation_id = relation.id,
            course_id = relation.course_id,
            tag_id = relation.tag_id,
            "Tag relation created"
        );
        self.events.publish(DomainEvent::new(
            Entity::TagRelation,
            EventAction::Create,
            relation.id,
        ));

        let course = self.course_summary(relation.course_id).await?;
        let tag = self.tag_summary(relation.tag_id).await?;
        Ok(relation.into_response(course, tag))
    }

    /// Partially update a tag relation.
    pub async fn update(&self, id: i64, data: UpdateTagRelation) -> AppResult<TagRelationResponse> {
        ensure_id(id)?;
        if let Some(course_id) = data.course_id {
            self.ensure_course_exists(course_id).await?;
        }
        if let Some(tag_id) = data.tag_id {
            self.ensure_tag_exists(tag_id).await?;
        }

        let relation = self.relations.update(id, &data).await?;
        info!(relation_id = relation.id, "Tag relation updated");
        self.events.publish(DomainEvent::new(
            Entity::TagRelation,
            EventAction::Update,
            relation.id,
        ));

        let course = self.course_summary(relation.course_id).await?;
        let tag = self.tag_summary(relation.tag_id).await?;
        Ok(relation.into_response(course, tag))
    }

    /// Soft-delete a tag relation.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.relations.soft_delete(id).await?;
        info!(relation_id = id, "Tag relation deleted");
        self.events
            .publish(DomainEvent::new(Entity::TagRelation, EventAction::Delete, id));
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

    async fn ensure_tag_exists(&self, tag_id: i64) -> AppResult<()> {
        ensure_id(tag_id)?;
        if !self.tags.exists(tag_id).await? {
            return Err(AppError::validation(format!("Tag {tag_id} does not exist")));
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

    async fn tag_summary(&self, tag_id: i64) -> AppResult<Option<SelectOption>> {
        Ok(self
            .tags
            .find_by_id(tag_id)
            .await?
            .map(|tag| tag.to_select_option()))
    }
}
