//! Course repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::course::{Course, CreateCourse, UpdateCourse};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &[
    "id",
    "title",
    "price",
    "level",
    "status",
    "duration",
    "created_at",
    "updated_at",
];

/// Repository for course CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live course by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find course by id", e)
            })
    }

    /// Check whether a live course with the given id exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check course existence", e)
        })
    }

    /// List live courses with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Course>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count courses", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT * FROM courses WHERE deleted_at IS NULL ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list courses", e))?;

        Ok(PageResponse::new(
            courses,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live courses as `{id, name}` options, sorted by title.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, title AS name FROM courses WHERE deleted_at IS NULL ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list course options", e)
        })
    }

    /// Create a new course.
    pub async fn create(&self, data: &CreateCourse) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, slug, description, price, level, language, \
                                  thumbnail_url, status, duration, instructor_id, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.level)
        .bind(&data.language)
        .bind(&data.thumbnail_url)
        .bind(data.status)
        .bind(data.duration)
        .bind(data.instructor_id)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("courses_slug_key") => {
                AppError::conflict(format!("Course slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create course", e),
        })
    }

    /// Partially update a live course. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateCourse) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "UPDATE courses SET title = COALESCE($2, title), \
                                slug = COALESCE($3, slug), \
                                description = COALESCE($4, description), \
                                price = COALESCE($5, price), \
                                level = COALESCE($6, level), \
                                language = COALESCE($7, language), \
                                thumbnail_url = COALESCE($8, thumbnail_url), \
                                status = COALESCE($9, status), \
                                duration = COALESCE($10, duration), \
                                instructor_id = COALESCE($11, instructor_id), \
                                category_id = COALESCE($12, category_id), \
                                updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.level)
        .bind(&data.language)
        .bind(&data.thumbnail_url)
        .bind(data.status)
        .bind(data.duration)
        .bind(data.instructor_id)
        .bind(data.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("courses_slug_key") => {
                AppError::conflict("Course slug already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update course", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Course {id} not found")))
    }

    /// Soft-delete a live course by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE courses SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete course", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Course {id} not found")));
        }
        Ok(())
    }
}
