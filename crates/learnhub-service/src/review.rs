//! Review business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CourseRepository, ReviewRepository};
use learnhub_entity::review::{CreateReview, ReviewResponse, UpdateReview};

use crate::ensure_id;

/// Handles review CRUD operations.
#[derive(Debug, Clone)]
pub struct ReviewService {
    reviews: Arc<ReviewRepository>,
    /// Course repository, for referential checks and summaries.
    courses: Arc<CourseRepository>,
    events: EventBus,
}

impl ReviewService {
    /// Create a new review service.
    pub fn new(
        reviews: Arc<ReviewRepository>,
        courses: Arc<CourseRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            reviews,
            courses,
            events,
        }
    }

    /// List reviews with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<ReviewResponse>> {
        let reviews = self.reviews.find_all(page, sort).await?;
        Ok(reviews.map(|review| review.into_response(None)))
    }

    /// List all reviews as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.reviews.find_all_for_select().await
    }

    /// Get a single review with its course summary resolved.
    pub async fn get(&self, id: i64) -> AppResult<ReviewResponse> {
        ensure_id(id)?;
        let review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Review {id} not found")))?;
        let course = self.course_summary(review.course_id).await?;
        Ok(review.into_response(course))
    }

    /// Create a review after checking that the referenced course exists.
    pub async fn create(&self, data: CreateReview) -> AppResult<ReviewResponse> {
        self.ensure_course_exists(data.course_id).await?;

        let review = self.reviews.create(&data).await?;
        info!(
            review_id = review.id,
            rating = review.rating,
            course_id = review.course_id,
            "Review created"
        );
        self.events
            .publish(DomainEvent::new(Entity::Review, EventAction::Create, review.id));

        let course = self.course_summary(review.course_id).await?;
        Ok(review.into_response(course))
    }

    /// Partially update a review.
    pub async fn update(&self, id: i64, data: UpdateReview) -> AppResult<ReviewResponse> {
        ensure_id(id)?;
        if let Some(course_id) = data.course_id {
            self.ensure_course_exists(course_id).await?;
        }

        let review = self.reviews.update(id, &data).await?;
        info!(review_id = review.id, "Review updated");
        self.events
            .publish(DomainEvent::new(Entity::Review, EventAction::Update, review.id));

        let course = self.course_summary(review.course_id).await?;
        Ok(review.into_response(course))
    }

    /// Soft-delete a review.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.reviews.soft_delete(id).await?;
        info!(review_id = id, "Review deleted");
        self.events
            .publish(DomainEvent::new(Entity::Review, EventAction::Delete, id));
        Ok(())
    }

    async fn ensure_course_exists(&self, course_id: i64) -> AppResult<()> {
        ensure_id(course_id)?;
        if !self.courses.exists(course_id).await? {
            return Err(AppError::validation(format!(
                "Course {course_id} does not exist"
            )));
        }
        Ok(())
    }

    async fn course_summary(&self, course_id: i64) -> AppResult<Option<SelectOption>> {
        Ok(self
            .courses
            .find_by_id(course_id)
            .await?
            .map(|course| course.to_select_option()))
    }
}
