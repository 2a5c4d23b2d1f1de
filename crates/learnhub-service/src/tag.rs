//! Course tag business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::TagRepository;
use learnhub_entity::tag::{CreateTag, TagResponse, UpdateTag};

use crate::ensure_id;

/// Handles tag CRUD operations.
#[derive(Debug, Clone)]
pub struct TagService {
    tags: Arc<TagRepository>,
    events: EventBus,
}

impl TagService {
    /// Create a new tag service.
    pub fn new(tags: Arc<TagRepository>, events: EventBus) -> Self {
        Self { tags, events }
    }

    /// List tags with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<TagResponse>> {
        let tags = self.tags.find_all(page, sort).await?;
        Ok(tags.map(|tag| tag.into_response()))
    }

    /// List all tags as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.tags.find_all_for_select().await
    }

    /// Get a single tag.
    pub async fn get(&self, id: i64) -> AppResult<TagResponse> {
        ensure_id(id)?;
        let tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tag {id} not found")))?;
        Ok(tag.into_response())
    }

    /// Create a tag.
    pub async fn create(&self, data: CreateTag) -> AppResult<TagResponse> {
        let tag = self.tags.create(&data).await?;
        info!(tag_id = tag.id, name = %tag.name, "Tag created");
        self.events
            .publish(DomainEvent::new(Entity::Tag, EventAction::Create, tag.id));
        Ok(tag.into_response())
    }

    /// Partially update a tag.
    pub async fn update(&self, id: i64, data: UpdateTag) -> AppResult<TagResponse> {
        ensure_id(id)?;
        let tag = self.tags.update(id, &data).await?;
        info!(tag_id = tag.id, "Tag updated");
        self.events
            .publish(DomainEvent::new(Entity::Tag, EventAction::Update, tag.id));
        Ok(tag.into_response())
    }

    /// Soft-delete a tag.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.tags.soft_delete(id).await?;
        info!(tag_id = id, "Tag deleted");
        self.events
            .publish(DomainEvent::new(Entity::Tag, EventAction::Delete, id));
        Ok(())
    }
}
