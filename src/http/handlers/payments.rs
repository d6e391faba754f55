use crate::domain::payment::{
    ErrorEnvelope, ErrorPayload, PaymentError, PaymentIntentRequest, PaymentStatus,
};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn create_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<PaymentIntentRequest>,
) -> impl IntoResponse {
    let actor_type = header_or(&headers, "X-Actor-Type", "customer");
    let user_id = header_or(&headers, "X-User-Id", "U-CUSTOMER-1");

    match state
        .payment_service
        .create_intent(&req.booking_id, req.amount, &req.currency, &actor_type, &user_id)
        .await
    {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn authorize(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    apply_transition(state, payment_id, PaymentStatus::Authorized).await
}

pub async fn capture(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    apply_transition(state, payment_id, PaymentStatus::Captured).await
}

pub async fn refund(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    apply_transition(state, payment_id, PaymentStatus::Refunded).await
}

async fn apply_transition(state: AppState, payment_id: String, target: PaymentStatus) -> Response {
    match state.payment_service.transition(&payment_id, target).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

fn header_or(headers: &HeaderMap, name: &str, default: &str) -> String {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

fn error_response(err: PaymentError) -> Response {
    let (status, code) = match &err {
        PaymentError::NotFound { .. } => (StatusCode::NOT_FOUND, "PAYMENT_NOT_FOUND"),
        PaymentError::InvalidAmount { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_AMOUNT"),
        PaymentError::EmptyBookingId => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_BOOKING_ID"),
    };

    let body = ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: err.to_string(),
            details: None,
        },
    };
    (status, Json(body)).into_response()
}
