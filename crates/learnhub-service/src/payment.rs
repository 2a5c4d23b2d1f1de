//! Payment business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CourseRepository, PaymentRepository};
use learnhub_entity::payment::{CreatePayment, PaymentResponse, UpdatePayment};

use crate::ensure_id;

/// Handles payment CRUD operations.
#[derive(Debug, Clone)]
pub struct PaymentService {
    payments: Arc<PaymentRepository>,
    /// Course repository, for referential checks and summaries.
    courses: Arc<CourseRepository>,
    events: EventBus,
}

impl PaymentService {
    /// Create a new payment service.
    pub fn new(
        payments: Arc<PaymentRepository>,
        courses: Arc<CourseRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            payments,
            courses,
            events,
        }
    }

    /// List payments with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<PaymentResponse>> {
        let payments = self.payments.find_all(page, sort).await?;
        Ok(payments.map(|payment| payment.into_response(None)))
    }

    /// List all payments as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.payments.find_all_for_select().await
    }

    /// Get a single payment with its course summary resolved.
    pub async fn get(&self, id: i64) -> AppResult<PaymentResponse> {
        ensure_id(id)?;
        let payment = self
            .payments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Payment {id} not found")))?;
        let course = self.course_summary(payment.course_id).await?;
        Ok(payment.into_response(course))
    }

    /// Create a payment after checking that the referenced course exists.
    pub async fn create(&self, data: CreatePayment) -> AppResult<PaymentResponse> {
        self.ensure_course_exists(data.course_id).await?;

        let payment = self.payments.create(&data).await?;
        info!(
            payment_id = payment.id,
            amount = payment.amount,
            status = %payment.payment_status,
            "Payment created"
        );
        self.events.publish(DomainEvent::new(
            Entity::Payment,
            EventAction::Create,
            payment.id,
        ));

        let course = self.course_summary(payment.course_id).await?;
        Ok(payment.into_response(course))
    }

    /// Partially update a payment.
    pub async fn update(&self, id: i64, data: UpdatePayment) -> AppResult<PaymentResponse> {
        ensure_id(id)?;
        if let Some(course_id) = data.course_id {
            self.ensure_course_exists(course_id).await?;
        }

        let payment = self.payments.update(id, &data).await?;
        info!(payment_id = payment.id, "Payment updated");
        self.events.publish(DomainEvent::new(
            Entity::Payment,
            EventAction::Update,
            payment.id,
        ));

        let course = self.course_summary(payment.course_id).await?;
        Ok(payment.into_response(course))
    }

    /// Soft-delete a payment.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.payments.soft_delete(id).await?;
        info!(payment_id = id, "Payment deleted");
        self.events
            .publish(DomainEvent::new(Entity::Payment, EventAction::Delete, id));
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
