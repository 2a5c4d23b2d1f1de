//! Course tag repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::tag::{CreateTag, Tag, UpdateTag};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &["id", "name", "created_at", "updated_at"];

/// Repository for tag CRUD and query operations.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    /// Create a new tag repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live tag by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM course_tags WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tag by id", e))
    }

    /// Check whether a live tag with the given id exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM course_tags WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check tag existence", e)
        })
    }

    /// List live tags with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Tag>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM course_tags WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count tags", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let tags = sqlx::query_as::<_, Tag>(&format!(
            "SELECT * FROM course_tags WHERE deleted_at IS NULL ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tags", e))?;

        Ok(PageResponse::new(
            tags,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live tags as `{id, name}` options, sorted by name.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, name FROM course_tags WHERE deleted_at IS NULL ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tag options", e))
    }

    /// Create a new tag.
    pub async fn create(&self, data: &CreateTag) -> AppResult<Tag> {
        sqlx::query_as::<_, Tag>("INSERT INTO course_tags (name) VALUES ($1) RETURNING *")
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("course_tags_name_key") =>
                {
                    AppError::conflict(format!("Tag '{}' already exists", data.name))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create tag", e),
            })
    }

    /// Partially update a live tag. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateTag) -> AppResult<Tag> {
        sqlx::query_as::<_, Tag>(
            "UPDATE course_tags SET name = COALESCE($2, name), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("course_tags_name_key") =>
            {
                AppError::conflict("Tag name already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update tag", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Tag {id} not found")))
    }

    /// Soft-delete a live tag by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE course_tags SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete tag", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Tag {id} not found")));
        }
        Ok(())
    }
}
