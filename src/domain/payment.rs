use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    IntentCreated,
    Authorized,
    Captured,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub payment_id: String,
    pub booking_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub actor_type: String,
    pub user_id: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    pub booking_id: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

pub fn default_currency() -> String {
    "INR".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderWebhookRequest {
    pub provider: String,
    pub event_type: String,
    // Open-ended provider payload; acknowledged without interpreting any field.
    #[serde(default)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAck {
    pub accepted: bool,
    pub provider: String,
    pub event_type: String,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment not found: {payment_id}")]
    NotFound { payment_id: String },
    #[error("amount must be greater than zero, got {amount}")]
    InvalidAmount { amount: f64 },
    #[error("bookingId must not be empty")]
    EmptyBookingId,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
