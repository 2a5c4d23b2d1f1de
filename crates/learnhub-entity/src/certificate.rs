//! Course certificate entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::types::SelectOption;

/// A completion certificate issued for an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    /// Primary key.
    pub id: i64,
    /// URL of the rendered certificate document.
    pub certificate_url: String,
    /// When the certificate was issued.
    pub issued_at: DateTime<Utc>,
    /// The completed enrollment.
    pub enrollment_id: i64,
    /// When the certificate was created.
    pub created_at: DateTime<Utc>,
    /// When the certificate was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Certificate {
    /// Human-readable display name. Certificates have no natural name
    /// field, so fall back to an id-based label.
    pub fn display_name(&self) -> String {
        format!("Certificate #{}", self.id)
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved
    /// enrollment summary when available.
    pub fn into_response(self, enrollment: Option<SelectOption>) -> CertificateResponse {
        CertificateResponse {
            id: self.id,
            certificate_url: self.certificate_url,
            issued_at: self.issued_at,
            enrollment_id: self.enrollment_id,
            enrollment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCertificate {
    /// The completed enrollment.
    #[validate(range(min = 1, message = "enrollment_id must be positive"))]
    pub enrollment_id: i64,
    /// URL of the rendered certificate document.
    #[validate(length(min = 1, message = "certificate_url cannot be empty"))]
    pub certificate_url: String,
    /// When the certificate was issued (defaults to now).
    pub issued_at: Option<DateTime<Utc>>,
}

/// Request payload for updating a certificate. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCertificate {
    /// New enrollment id.
    #[validate(range(min = 1, message = "enrollment_id must be positive"))]
    pub enrollment_id: Option<i64>,
    /// New certificate URL.
    #[validate(length(min = 1, message = "certificate_url cannot be empty"))]
    pub certificate_url: Option<String>,
    /// New issue time.
    pub issued_at: Option<DateTime<Utc>>,
}

/// API response for a certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateResponse {
    /// Primary key.
    pub id: i64,
    /// URL of the rendered certificate document.
    pub certificate_url: String,
    /// When the certificate was issued.
    pub issued_at: DateTime<Utc>,
    /// The completed enrollment.
    pub enrollment_id: i64,
    /// Enrollment summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<SelectOption>,
    /// When the certificate was created.
    pub created_at: DateTime<Utc>,
    /// When the certificate was last updated.
    pub updated_at: DateTime<Utc>,
}
