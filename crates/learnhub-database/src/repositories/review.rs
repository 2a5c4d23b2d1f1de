//! Review repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::review::{CreateReview, Review, UpdateReview};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &[
    "id",
    "rating",
    "course_id",
    "student_id",
    "created_at",
    "updated_at",
];

/// Repository for review CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live review by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find review by id", e)
            })
    }

    /// List live reviews with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Review>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count reviews", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT * FROM reviews WHERE deleted_at IS NULL ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))?;

        Ok(PageResponse::new(
            reviews,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live reviews as `{id, name}` options.
    ///
    /// Reviews have no natural name column, so the label is derived from
    /// the id.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, 'Review #' || id AS name FROM reviews \
             WHERE deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list review options", e)
        })
    }

    /// Create a new review.
    pub async fn create(&self, data: &CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (rating, comment, course_id, student_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.rating)
        .bind(&data.comment)
        .bind(data.course_id)
        .bind(data.student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create review", e))
    }

    /// Partially update a live review. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET rating = COALESCE($2, rating), \
                                comment = COALESCE($3, comment), \
                                course_id = COALESCE($4, course_id), \
                                student_id = COALESCE($5, student_id), \
                                updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(data.rating)
        .bind(&data.comment)
        .bind(data.course_id)
        .bind(data.student_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update review", e))?
        .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))
    }

    /// Soft-delete a live review by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE reviews SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete review", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Review {id} not found")));
        }
        Ok(())
    }
}
