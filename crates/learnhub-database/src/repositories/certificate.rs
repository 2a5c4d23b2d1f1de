//! Course certificate repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::certificate::{Certificate, CreateCertificate, UpdateCertificate};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &["id", "issued_at", "enrollment_id", "created_at", "updated_at"];

/// Repository for certificate CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CertificateRepository {
    pool: PgPool,
}

impl CertificateRepository {
    /// Create a new certificate repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live certificate by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Certificate>> {
        sqlx::query_as::<_, Certificate>(
            "SELECT * FROM course_certificates WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find certificate by id", e)
        })
    }

    /// List live certificates with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Certificate>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM course_certificates WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count certificates", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let certificates = sqlx::query_as::<_, Certificate>(&format!(
            "SELECT * FROM course_certificates WHERE deleted_at IS NULL \
             ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list certificates", e)
        })?;

        Ok(PageResponse::new(
            certificates,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live certificates as `{id, name}` options.
    ///
    /// Certificates have no natural name column, so the label is derived
    /// from the id.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, 'Certificate #' || id AS name FROM course_certificates \
             WHERE deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list certificate options", e)
        })
    }

    /// Create a new certificate. `issued_at` defaults to now.
    pub async fn create(&self, data: &CreateCertificate) -> AppResult<Certificate> {
        sqlx::query_as::<_, Certificate>(
            "INSERT INTO course_certificates (certificate_url, issued_at, enrollment_id) \
             VALUES ($1, COALESCE($2, NOW()), $3) \
             RETURNING *",
        )
        .bind(&data.certificate_url)
        .bind(data.issued_at)
        .bind(data.enrollment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create certificate", e))
    }

    /// Partially update a live certificate. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateCertificate) -> AppResult<Certificate> {
        sqlx::query_as::<_, Certificate>(
            "UPDATE course_certificates SET certificate_url = COALESCE($2, certificate_url), \
                                            issued_at = COALESCE($3, issued_at), \
                                            enrollment_id = COALESCE($4, enrollment_id), \
                                            updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.certificate_url)
        .bind(data.issued_at)
        .bind(data.enrollment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update certificate", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Certificate {id} not found")))
    }

    /// Soft-delete a live certificate by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE course_certificates SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete certificate", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Certificate {id} not found")));
        }
        Ok(())
    }
}
