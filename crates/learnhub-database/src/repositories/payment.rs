//! Payment repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::payment::{CreatePayment, Payment, UpdatePayment};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &[
    "id",
    "amount",
    "payment_method",
    "payment_status",
    "user_id",
    "course_id",
    "created_at",
    "updated_at",
];

/// Repository for payment CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live payment by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find payment by id", e)
            })
    }

    /// List live payments with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<Payment>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM payments WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count payments", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT * FROM payments WHERE deleted_at IS NULL ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))?;

        Ok(PageResponse::new(
            payments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live payments as `{id, name}` options.
    ///
    /// Payments have no natural name column, so the label is derived from
    /// the id.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, 'Payment #' || id AS name FROM payments \
             WHERE deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list payment options", e)
        })
    }

    /// Create a new payment.
    pub async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (amount, payment_method, payment_status, transaction_id, \
                                   user_id, course_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.amount)
        .bind(data.payment_method)
        .bind(data.payment_status)
        .bind(&data.transaction_id)
        .bind(data.user_id)
        .bind(data.course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create payment", e))
    }

    /// Partially update a live payment. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "UPDATE payments SET amount = COALESCE($2, amount), \
                                 payment_method = COALESCE($3, payment_method), \
                                 payment_status = COALESCE($4, payment_status), \
                                 transaction_id = COALESCE($5, transaction_id), \
                                 user_id = COALESCE($6, user_id), \
                                 course_id = COALESCE($7, course_id), \
                                 updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(data.amount)
        .bind(data.payment_method)
        .bind(data.payment_status)
        .bind(&data.transaction_id)
        .bind(data.user_id)
        .bind(data.course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update payment", e))?
        .ok_or_else(|| AppError::not_found(format!("Payment {id} not found")))
    }

    /// Soft-delete a live payment by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE payments SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete payment", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Payment {id} not found")));
        }
        Ok(())
    }
}
