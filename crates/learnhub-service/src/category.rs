//! Course category business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::CategoryRepository;
use learnhub_entity::category::{CategoryResponse, CreateCategory, UpdateCategory};

use crate::ensure_id;

/// Handles category CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryService {
    categories: Arc<CategoryRepository>,
    events: EventBus,
}

impl CategoryService {
    /// Create a new category service.
    pub fn new(categories: Arc<CategoryRepository>, events: EventBus) -> Self {
        Self { categories, events }
    }

    /// List categories with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<CategoryResponse>> {
        let categories = self.categories.find_all(page, sort).await?;
        Ok(categories.map(|category| category.into_response()))
    }

    /// List all categories as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.categories.find_all_for_select().await
    }

    /// Get a single category.
    pub async fn get(&self, id: i64) -> AppResult<CategoryResponse> {
        ensure_id(id)?;
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
        Ok(category.into_response())
    }

    /// Create a category.
    pub async fn create(&self, data: CreateCategory) -> AppResult<CategoryResponse> {
        let category = self.categories.create(&data).await?;
        info!(category_id = category.id, name = %category.name, "Category created");
        self.events.publish(DomainEvent::new(
            Entity::Category,
            EventAction::Create,
            category.id,
        ));
        Ok(category.into_response())
    }

    /// Partially update a category.
    pub async fn update(&self, id: i64, data: UpdateCategory) -> AppResult<CategoryResponse> {
        ensure_id(id)?;
        let category = self.categories.update(id, &data).await?;
        info!(category_id = category.id, "Category updated");
        self.events.publish(DomainEvent::new(
            Entity::Category,
            EventAction::Update,
            category.id,
        ));
        Ok(category.into_response())
    }

    /// Soft-delete a category.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.categories.soft_delete(id).await?;
        info!(category_id = id, "Category deleted");
        self.events
            .publish(DomainEvent::new(Entity::Category, EventAction::Delete, id));
        Ok(())
    }
}
