//! Lesson repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::lesson::{CreateLesson, Lesson, UpdateLesson};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &[
    "id",
    "title",
    "duration",
    "order_number",
    "course_id",
    "created_at",
    "updated_at",
];

/// Repository for lesson CRUD and query operations.
#[derive(Debug, Clone)]
pub struct LessonRepository {
    pool: PgPool,
}

impl LessonRepository {
    /// Create a new lesson repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live lesson by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Lesson>> {
        sqlx::query_as::<_, Lesson>("SELECT * FROM lessons WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find lesson by id", e)
            })
    }

    /// Check whether a live lesson with the given id exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM lessons WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check lesson existence", e)
        })
    }

    /// List live lessons with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Lesson>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM lessons WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count lessons", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let lessons = sqlx::query_as::<_, Lesson>(&format!(
            "SELECT * FROM lessons WHERE deleted_at IS NULL ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list lessons", e))?;

        Ok(PageResponse::new(
            lessons,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live lessons as `{id, name}` options, sorted by title.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, title AS name FROM lessons WHERE deleted_at IS NULL ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list lesson options", e)
        })
    }

    /// Create a new lesson.
    pub async fn create(&self, data: &CreateLesson) -> AppResult<Lesson> {
        sqlx::query_as::<_, Lesson>(
            "INSERT INTO lessons (title, content, video_url, duration, order_number, course_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.video_url)
        .bind(data.duration)
        .bind(data.order_number)
        .bind(data.course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create lesson", e))
    }

    /// Partially update a live lesson. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateLesson) -> AppResult<Lesson> {
        sqlx::query_as::<_, Lesson>(
            "UPDATE lessons SET title = COALESCE($2, title), \
                                content = COALESCE($3, content), \
                                video_url = COALESCE($4, video_url), \
                                duration = COALESCE($5, duration), \
                                order_number = COALESCE($6, order_number), \
                                course_id = COALESCE($7, course_id), \
                                updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.video_url)
        .bind(data.duration)
        .bind(data.order_number)
        .bind(data.course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update lesson", e))?
        .ok_or_else(|| AppError::not_found(format!("Lesson {id} not found")))
    }

    /// Soft-delete a live lesson by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE lessons SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete lesson", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Lesson {id} not found")));
        }
        Ok(())
    }
}
