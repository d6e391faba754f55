use crate::domain::payment::PaymentRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct PaymentsRepo {
    records: Arc<RwLock<HashMap<String, PaymentRecord>>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn save(&self, record: PaymentRecord) -> PaymentRecord {
        let mut records = self.records.write().await;
        records.insert(record.payment_id.clone(), record.clone());
        record
    }

    pub async fn find(&self, payment_id: &str) -> Option<PaymentRecord> {
        let records = self.records.read().await;
        records.get(payment_id).cloned()
    }

    // Read-modify-write under a single write lock: concurrent updates to the
    // same payment serialize here instead of racing between find and save.
    pub async fn update<F>(&self, payment_id: &str, apply: F) -> Option<PaymentRecord>
    where
        F: FnOnce(&mut PaymentRecord),
    {
        let mut records = self.records.write().await;
        let record = records.get_mut(payment_id)?;
        apply(record);
        Some(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentStatus;

    fn record(payment_id: &str) -> PaymentRecord {
        PaymentRecord {
            payment_id: payment_id.to_string(),
            booking_id: "BOOK-1".to_string(),
            amount: 100.0,
            currency: "INR".to_string(),
            status: PaymentStatus::IntentCreated,
            actor_type: "customer".to_string(),
            user_id: "U-1".to_string(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn save_then_find_returns_record() {
        let repo = PaymentsRepo::new();
        repo.save(record("PAY-1")).await;

        let found = repo.find("PAY-1").await.unwrap();
        assert_eq!(found.payment_id, "PAY-1");
        assert_eq!(found.booking_id, "BOOK-1");
    }

    #[tokio::test]
    async fn find_unknown_id_is_none() {
        let repo = PaymentsRepo::new();
        assert!(repo.find("PAY-MISSING").await.is_none());
    }

    #[tokio::test]
    async fn save_is_idempotent() {
        let repo = PaymentsRepo::new();
        let rec = record("PAY-1");
        repo.save(rec.clone()).await;
        repo.save(rec).await;

        let found = repo.find("PAY-1").await.unwrap();
        assert_eq!(found.amount, 100.0);
        assert_eq!(found.status, PaymentStatus::IntentCreated);
    }

    #[tokio::test]
    async fn latest_save_wins() {
        let repo = PaymentsRepo::new();
        repo.save(record("PAY-1")).await;

        let mut newer = record("PAY-1");
        newer.status = PaymentStatus::Captured;
        repo.save(newer).await;

        let found = repo.find("PAY-1").await.unwrap();
        assert_eq!(found.status, PaymentStatus::Captured);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none_and_creates_nothing() {
        let repo = PaymentsRepo::new();
        let out = repo
            .update("PAY-MISSING", |r| r.status = PaymentStatus::Refunded)
            .await;
        assert!(out.is_none());
        assert!(repo.find("PAY-MISSING").await.is_none());
    }

    #[tokio::test]
    async fn update_applies_under_lock_and_returns_copy() {
        let repo = PaymentsRepo::new();
        repo.save(record("PAY-1")).await;

        let updated = repo
            .update("PAY-1", |r| r.status = PaymentStatus::Authorized)
            .await
            .unwrap();
        assert_eq!(updated.status, PaymentStatus::Authorized);

        let found = repo.find("PAY-1").await.unwrap();
        assert_eq!(found.status, PaymentStatus::Authorized);
    }
}
