//! Course category repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::category::{Category, CreateCategory, UpdateCategory};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &["id", "name", "slug", "created_at", "updated_at"];

/// Repository for category CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live category by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM course_categories WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category by id", e))
    }

    /// Check whether a live category with the given id exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM course_categories WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check category existence", e)
        })
    }

    /// List live categories with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Category>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM course_categories WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT * FROM course_categories WHERE deleted_at IS NULL \
             ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))?;

        Ok(PageResponse::new(
            categories,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live categories as `{id, name}` options, sorted by name.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, name FROM course_categories WHERE deleted_at IS NULL ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list category options", e)
        })
    }

    /// Create a new category.
    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO course_categories (name, slug, description) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("course_categories_slug_key") =>
            {
                AppError::conflict(format!("Category slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create category", e),
        })
    }

    /// Partially update a live category. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE course_categories SET name = COALESCE($2, name), \
                                          slug = COALESCE($3, slug), \
                                          description = COALESCE($4, description), \
                                          updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("course_categories_slug_key") =>
            {
                AppError::conflict("Category slug already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update category", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Soft-delete a live category by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE course_categories SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete category", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Category {id} not found")));
        }
        Ok(())
    }
}
