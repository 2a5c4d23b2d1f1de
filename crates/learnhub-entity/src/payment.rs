//! Payment entity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use learnhub_core::AppError;
use learnhub_core::types::SelectOption;

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_method", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    CreditCard,
    /// PayPal.
    Paypal,
    /// Direct bank transfer.
    BankTransfer,
}

impl PaymentMethod {
    /// Return the method as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Paypal => "paypal",
            Self::BankTransfer => "bank_transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit_card" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::Paypal),
            "bank_transfer" => Ok(Self::BankTransfer),
            _ => Err(AppError::validation(format!(
                "Invalid payment method: '{s}'. Expected one of: credit_card, paypal, bank_transfer"
            ))),
        }
    }
}

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Awaiting settlement.
    Pending,
    /// Settled successfully.
    Completed,
    /// Settlement failed.
    Failed,
}

impl PaymentStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(AppError::validation(format!(
                "Invalid payment status: '{s}'. Expected one of: pending, completed, failed"
            ))),
        }
    }
}

/// A payment made for a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Primary key.
    pub id: i64,
    /// Amount in cents.
    pub amount: i32,
    /// How the payment was made.
    pub payment_method: PaymentMethod,
    /// Settlement state.
    pub payment_status: PaymentStatus,
    /// External gateway transaction reference.
    pub transaction_id: Option<String>,
    /// The paying user's id (platform identity service).
    pub user_id: i64,
    /// The purchased course.
    pub course_id: i64,
    /// When the payment was created.
    pub created_at: DateTime<Utc>,
    /// When the payment was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (`None` = live row).
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Payment {
    /// Human-readable display name. Payments have no natural name field,
    /// so fall back to an id-based label.
    pub fn display_name(&self) -> String {
        format!("Payment #{}", self.id)
    }

    /// Convert to the `{id, name}` projection for dropdowns and summaries.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption::new(self.id, self.display_name())
    }

    /// Convert to the API detail response, embedding the resolved course
    /// summary when available.
    pub fn into_response(self, course: Option<SelectOption>) -> PaymentResponse {
        PaymentResponse {
            id: self.id,
            amount: self.amount,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            transaction_id: self.transaction_id,
            user_id: self.user_id,
            course_id: self.course_id,
            course,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request payload for creating a payment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePayment {
    /// The paying user's id.
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i64,
    /// The purchased course.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: i64,
    /// Amount in cents.
    #[validate(range(min = 0, message = "amount cannot be negative"))]
    pub amount: i32,
    /// How the payment was made.
    pub payment_method: PaymentMethod,
    /// Settlement state.
    pub payment_status: PaymentStatus,
    /// External gateway transaction reference.
    pub transaction_id: Option<String>,
}

/// Request payload for updating a payment. Absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePayment {
    /// New user id.
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: Option<i64>,
    /// New course id.
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: Option<i64>,
    /// New amount in cents.
    #[validate(range(min = 0, message = "amount cannot be negative"))]
    pub amount: Option<i32>,
    /// New payment method.
    pub payment_method: Option<PaymentMethod>,
    /// New settlement state.
    pub payment_status: Option<PaymentStatus>,
    /// New transaction reference.
    pub transaction_id: Option<String>,
}

/// API response for a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Primary key.
    pub id: i64,
    /// Amount in cents.
    pub amount: i32,
    /// How the payment was made.
    pub payment_method: PaymentMethod,
    /// Settlement state.
    pub payment_status: PaymentStatus,
    /// External gateway transaction reference.
    pub transaction_id: Option<String>,
    /// The paying user's id.
    pub user_id: i64,
    /// The purchased course.
    pub course_id: i64,
    /// Course summary (detail responses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<SelectOption>,
    /// When the payment was created.
    pub created_at: DateTime<Utc>,
    /// When the payment was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!(
            "credit_card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert!("cash".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_method_serde_is_snake_case() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
        }
    }
}
