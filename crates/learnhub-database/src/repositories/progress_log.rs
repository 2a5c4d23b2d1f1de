//! Course progress log repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::progress_log::{CreateProgressLog, ProgressLog, UpdateProgressLog};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &[
    "id",
    "completed_at",
    "enrollment_id",
    "lesson_id",
    "created_at",
    "updated_at",
];

/// Repository for progress log CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ProgressLogRepository {
    pool: PgPool,
}

impl ProgressLogRepository {
    /// Create a new progress log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live progress log by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ProgressLog>> {
        sqlx::query_as::<_, ProgressLog>(
            "SELECT * FROM course_progress_logs WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find progress log by id", e)
        })
    }

    /// List live progress logs with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<ProgressLog>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM course_progress_logs WHERE deleted_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count progress logs", e)
        })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let logs = sqlx::query_as::<_, ProgressLog>(&format!(
            "SELECT * FROM course_progress_logs WHERE deleted_at IS NULL \
             ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list progress logs", e)
        })?;

        Ok(PageResponse::new(
            logs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live progress logs as `{id, name}` options.
    ///
    /// Progress logs have no natural name column, so the label is derived
    /// from the id.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, 'Progress #' || id AS name FROM course_progress_logs \
             WHERE deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list progress log options", e)
        })
    }

    /// Create a new progress log. `completed_at` defaults to now.
    pub async fn create(&self, data: &CreateProgressLog) -> AppResult<ProgressLog> {
        sqlx::query_as::<_, ProgressLog>(
            "INSERT INTO course_progress_logs (completed_at, enrollment_id, lesson_id) \
             VALUES (COALESCE($1, NOW()), $2, $3) \
             RETURNING *",
        )
        .bind(data.completed_at)
        .bind(data.enrollment_id)
        .bind(data.lesson_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create progress log", e)
        })
    }

    /// Partially update a live progress log. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateProgressLog) -> AppResult<ProgressLog> {
        sqlx::query_as::<_, ProgressLog>(
            "UPDATE course_progress_logs SET completed_at = COALESCE($2, completed_at), \
                                             enrollment_id = COALESCE($3, enrollment_id), \
                                             lesson_id = COALESCE($4, lesson_id), \
                                             updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(data.completed_at)
        .bind(data.enrollment_id)
        .bind(data.lesson_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update progress log", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Progress log {id} not found")))
    }

    /// Soft-delete a live progress log by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE course_progress_logs SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete progress log", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Progress log {id} not found")));
        }
        Ok(())
    }
}
