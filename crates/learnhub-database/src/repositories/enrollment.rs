//! Enrollment repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::enrollment::{CreateEnrollment, Enrollment, UpdateEnrollment};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &[
    "id",
    "enrolled_at",
    "progress",
    "completed",
    "student_id",
    "course_id",
    "created_at",
    "updated_at",
];

/// Repository for enrollment CRUD and query operations.
#[derive(Debug, Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    /// Create a new enrollment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live enrollment by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Enrollment>> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find enrollment by id", e)
        })
    }

    /// Check whether a live enrollment with the given id exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to check enrollment existence",
                e,
            )
        })
    }

    /// List live enrollments with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Enrollment>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count enrollments", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let enrollments = sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT * FROM enrollments WHERE deleted_at IS NULL ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list enrollments", e))?;

        Ok(PageResponse::new(
            enrollments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live enrollments as `{id, name}` options.
    ///
    /// Enrollments have no natural name column, so the label is derived
    /// from the id.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, 'Enrollment #' || id AS name FROM enrollments \
             WHERE deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list enrollment options", e)
        })
    }

    /// Create a new enrollment. `enrolled_at` defaults to now.
    pub async fn create(&self, data: &CreateEnrollment) -> AppResult<Enrollment> {
        sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_id, course_id, enrolled_at, progress, completed) \
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5) \
             RETURNING *",
        )
        .bind(data.student_id)
        .bind(data.course_id)
        .bind(data.enrolled_at)
        .bind(data.progress)
        .bind(data.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("enrollments_student_id_course_id_key") =>
            {
                AppError::conflict(format!(
                    "Student {} is already enrolled in course {}",
                    data.student_id, data.course_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create enrollment", e),
        })
    }

    /// Partially update a live enrollment. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateEnrollment) -> AppResult<Enrollment> {
        sqlx::query_as::<_, Enrollment>(
            "UPDATE enrollments SET student_id = COALESCE($2, student_id), \
                                    course_id = COALESCE($3, course_id), \
                                    enrolled_at = COALESCE($4, enrolled_at), \
                                    progress = COALESCE($5, progress), \
                                    completed = COALESCE($6, completed), \
                                    updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(data.student_id)
        .bind(data.course_id)
        .bind(data.enrolled_at)
        .bind(data.progress)
        .bind(data.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("enrollments_student_id_course_id_key") =>
            {
                AppError::conflict("Student is already enrolled in this course".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update enrollment", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Enrollment {id} not found")))
    }

    /// Soft-delete a live enrollment by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE enrollments SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete enrollment", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Enrollment {id} not found")));
        }
        Ok(())
    }
}
