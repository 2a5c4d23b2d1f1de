//! Course certificate business logic.

use std::sync::Arc;

use tracing::info;

use learnhub_core::events::{DomainEvent, Entity, EventAction, EventBus};
use learnhub_core::types::SelectOption;
use learnhub_core::types::pagination::{PageRequest, PageResponse};
use learnhub_core::types::sorting::SortField;
use learnhub_core::{AppError, AppResult};
use learnhub_database::repositories::{CertificateRepository, EnrollmentRepository};
use learnhub_entity::certificate::{CertificateResponse, CreateCertificate, UpdateCertificate};

use crate::ensure_id;

/// Handles certificate CRUD operations.
#[derive(Debug, Clone)]
pub struct CertificateService {
    certificates: Arc<CertificateRepository>,
    /// Enrollment repository, for referential checks and summaries.
    enrollments: Arc<EnrollmentRepository>,
    events: EventBus,
}

impl CertificateService {
    /// Create a new certificate service.
    pub fn new(
        certificates: Arc<CertificateRepository>,
        enrollments: Arc<EnrollmentRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            certificates,
            enrollments,
            events,
        }
    }

    /// List certificates with pagination and sorting.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: Option<&SortField>,
    ) -> AppResult<PageResponse<CertificateResponse>> {
        let certificates = self.certificates.find_all(page, sort).await?;
        Ok(certificates.map(|certificate| certificate.into_response(None)))
    }

    /// List all certificates as `{id, name}` options.
    pub async fn list_options(&self) -> AppResult<Vec<SelectOption>> {
        self.certificates.find_all_for_select().await
    }

    /// Get a single certificate with its enrollment summary resolved.
    pub async fn get(&self, id: i64) -> AppResult<CertificateResponse> {
        ensure_id(id)?;
        let certificate = self
            .certificates
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Certificate {id} not found")))?;
        let enrollment = self.enrollment_summary(certificate.enrollment_id).await?;
        Ok(certificate.into_response(enrollment))
    }

    /// Create a certificate after checking that the referenced enrollment
    /// exists.
    pub async fn create(&self, data: CreateCertificate) -> AppResult<CertificateResponse> {
        self.ensure_enrollment_exists(data.enrollment_id).await?;

        let certificate = self.certificates.create(&data).await?;
        info!(
            certificate_id = certificate.id,
            enrollment_id = certificate.enrollment_id,
            "Certificate created"
        );
        self.events.publish(DomainEvent::new(
            Entity::Certificate,
            EventAction::Create,
            certificate.id,
        ));

        let enrollment = self.enrollment_summary(certificate.enrollment_id).await?;
        Ok(certificate.into_response(enrollment))
    }

    /// Partially update a certificate.
    pub async fn update(&self, id: i64, data: UpdateCertificate) -> AppResult<CertificateResponse> {
        ensure_id(id)?;
        if let Some(enrollment_id) = data.enrollment_id {
            self.ensure_enrollment_exists(enrollment_id).await?;
        }

        let certificate = self.certificates.update(id, &data).await?;
        info!(certificate_id = certificate.id, "Certificate updated");
        self.events.publish(DomainEvent::new(
            Entity::Certificate,
            EventAction::Update,
            certificate.id,
        ));

        let enrollment = self.enrollment_summary(certificate.enrollment_id).await?;
        Ok(certificate.into_response(enrollment))
    }

    /// Soft-delete a certificate.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_id(id)?;
        self.certificates.soft_delete(id).await?;
        info!(certificate_id = id, "Certificate deleted");
        self.events
            .publish(DomainEvent::new(Entity::Certificate, EventAction::Delete, id));
        Ok(())
    }

    async fn ensure_enrollment_exists(&self, enrollment_id: i64) -> AppResult<()> {
        ensure_id(enrollment_id)?;
        if !self.enrollments.exists(enrollment_id).await? {
            return Err(AppError::validation(format!(
                "Enrollment {enrollment_id} does not exist"
            )));
        }
        Ok(())
    }

    async fn enrollment_summary(&self, enrollment_id: i64) -> AppResult<Option<SelectOption>> {
        Ok(self
            .enrollments
            .find_by_id(enrollment_id)
            .await?
            .map(|enrollment| enrollment.to_select_option()))
    }
}
