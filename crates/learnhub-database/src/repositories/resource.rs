//! Course resource repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::resource::{CreateResource, Resource, UpdateResource};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &[
    "id",
    "title",
    "uploaded_at",
    "course_id",
    "created_at",
    "updated_at",
];

/// Repository for resource CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live resource by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>(
            "SELECT * FROM course_resources WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find resource by id", e)
        })
    }

    /// List live resources with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Resource>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM course_resources WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count resources", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let resources = sqlx::query_as::<_, Resource>(&format!(
            "SELECT * FROM course_resources WHERE deleted_at IS NULL \
             ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))?;

        Ok(PageResponse::new(
            resources,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live resources as `{id, name}` options, sorted by title.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, title AS name FROM course_resources \
             WHERE deleted_at IS NULL ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list resource options", e)
        })
    }

    /// Create a new resource. `uploaded_at` defaults to now.
    pub async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "INSERT INTO course_resources (title, file_url, uploaded_at, course_id) \
             VALUES ($1, $2, COALESCE($3, NOW()), $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.file_url)
        .bind(data.uploaded_at)
        .bind(data.course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create resource", e))
    }

    /// Partially update a live resource. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "UPDATE course_resources SET title = COALESCE($2, title), \
                                         file_url = COALESCE($3, file_url), \
                                         uploaded_at = COALESCE($4, uploaded_at), \
                                         course_id = COALESCE($5, course_id), \
                                         updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.file_url)
        .bind(data.uploaded_at)
        .bind(data.course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update resource", e))?
        .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))
    }

    /// Soft-delete a live resource by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE course_resources SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete resource", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Resource {id} not found")));
        }
        Ok(())
    }
}
