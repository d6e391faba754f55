use crate::domain::payment::{ProviderWebhookRequest, WebhookAck};
use axum::response::IntoResponse;
use axum::Json;

// Pass-through acknowledgment: provider notifications are accepted and echoed
// back, never applied to payment state.
pub async fn provider_webhook(Json(req): Json<ProviderWebhookRequest>) -> impl IntoResponse {
    tracing::info!(
        provider = %req.provider,
        event_type = %req.event_type,
        "provider webhook acknowledged"
    );

    Json(WebhookAck {
        accepted: true,
        provider: req.provider,
        event_type: req.event_type,
    })
}
