use crate::domain::payment::{PaymentError, PaymentRecord, PaymentStatus};
use crate::repo::payments_repo::PaymentsRepo;
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub details: HealthDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDetails {
    pub mode: String,
    pub service: String,
    pub storage: String,
}

impl PaymentService {
    pub async fn create_intent(
        &self,
        booking_id: &str,
        amount: f64,
        currency: &str,
        actor_type: &str,
        user_id: &str,
    ) -> Result<PaymentRecord, PaymentError> {
        if amount <= 0.0 {
            return Err(PaymentError::InvalidAmount { amount });
        }
        if booking_id.is_empty() {
            return Err(PaymentError::EmptyBookingId);
        }

        let record = PaymentRecord {
            payment_id: new_payment_id(),
            booking_id: booking_id.to_string(),
            amount,
            currency: currency.to_string(),
            status: PaymentStatus::IntentCreated,
            actor_type: actor_type.to_string(),
            user_id: user_id.to_string(),
            updated_at: chrono::Utc::now(),
        };

        let saved = self.payments_repo.save(record).await;
        tracing::info!(
            payment_id = %saved.payment_id,
            booking_id = %saved.booking_id,
            "payment intent created"
        );
        Ok(saved)
    }

    // Permissive: the target status is applied regardless of the current one
    // (see DESIGN.md).
    pub async fn transition(
        &self,
        payment_id: &str,
        target: PaymentStatus,
    ) -> Result<PaymentRecord, PaymentError> {
        let updated = self
            .payments_repo
            .update(payment_id, |record| {
                record.status = target;
                record.updated_at = chrono::Utc::now();
            })
            .await
            .ok_or_else(|| PaymentError::NotFound {
                payment_id: payment_id.to_string(),
            })?;

        tracing::info!(
            payment_id = %updated.payment_id,
            status = ?updated.status,
            "payment transitioned"
        );
        Ok(updated)
    }

    pub fn health(&self, mode: &str) -> HealthReport {
        HealthReport {
            status: "UP".to_string(),
            details: HealthDetails {
                mode: mode.to_string(),
                service: "payment-service".to_string(),
                storage: "in-memory".to_string(),
            },
        }
    }
}

fn new_payment_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("PAY-{}", hex[..12].to_uppercase())
}
