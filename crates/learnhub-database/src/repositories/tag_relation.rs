//! Course-to-tag relation repository implementation.

use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::{SortField, order_by_clause};
use learnhub_entity::tag_relation::{CreateTagRelation, TagRelation, UpdateTagRelation};

/// Columns the list endpoint may sort by.
const SORTABLE: &[&str] = &["id", "course_id", "tag_id", "created_at", "updated_at"];

/// Repository for tag relation CRUD and query operations.
#[derive(Debug, Clone)]
pub struct TagRelationRepository {
    pool: PgPool,
}

impl TagRelationRepository {
    /// Create a new tag relation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live tag relation by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<TagRelation>> {
        sqlx::query_as::<_, TagRelation>(
            "SELECT * FROM course_tag_relations WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find tag relation by id", e)
        })
    }

    /// List live tag relations with pagination and whitelist-checked sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<TagRelation>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM course_tag_relations WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count tag relations", e)
                })?;

        let order = order_by_clause(SORTABLE, sort, "id");
        let relations = sqlx::query_as::<_, TagRelation>(&format!(
            "SELECT * FROM course_tag_relations WHERE deleted_at IS NULL \
             ORDER BY {order} LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list tag relations", e)
        })?;

        Ok(PageResponse::new(
            relations,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all live tag relations as `{id, name}` options.
    ///
    /// Relations have no natural name column, so the label is derived from
    /// the id.
    pub async fn find_all_for_select(&self) -> AppResult<Vec<SelectOption>> {
        sqlx::query_as::<_, SelectOption>(
            "SELECT id, 'Relation #' || id AS name FROM course_tag_relations \
             WHERE deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list tag relation options", e)
        })
    }

    /// Create a new tag relation.
    pub async fn create(&self, data: &CreateTagRelation) -> AppResult<TagRelation> {
        sqlx::query_as::<_, TagRelation>(
            "INSERT INTO course_tag_relations (course_id, tag_id) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(data.course_id)
        .bind(data.tag_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("course_tag_relations_course_id_tag_id_key") =>
            {
                AppError::conflict(format!(
                    "Course {} is already tagged with tag {}",
                    data.course_id, data.tag_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create tag relation", e),
        })
    }

    /// Partially update a live tag relation. Absent fields keep their values.
    pub async fn update(&self, id: i64, data: &UpdateTagRelation) -> AppResult<TagRelation> {
        sqlx::query_as::<_, TagRelation>(
            "UPDATE course_tag_relations SET course_id = COALESCE($2, course_id), \
                                             tag_id = COALESCE($3, tag_id), \
                                             updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(data.course_id)
        .bind(data.tag_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("course_tag_relations_course_id_tag_id_key") =>
            {
                AppError::conflict("Course is already tagged with this tag".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update tag relation", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Tag relation {id} not found")))
    }

    /// Soft-delete a live tag relation by setting its `deleted_at` timestamp.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE course_tag_relations SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete tag relation", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Tag relation {id} not found")));
        }
        Ok(())
    }
}
