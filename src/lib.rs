pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payments;
        pub mod webhooks;
    }
}
pub mod repo {
    pub mod payments_repo;
}
pub mod service {
    pub mod payment_service;
}

use axum::routing::{get, post};
use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(http::handlers::ops::health))
        .route("/api/v1/health/live", get(http::handlers::ops::liveness))
        .route("/api/v1/health/ready", get(http::handlers::ops::readiness))
        .route("/api/v1/payments/intent", post(http::handlers::payments::create_intent))
        .route(
            "/api/v1/payments/:payment_id/authorize",
            post(http::handlers::payments::authorize),
        )
        .route(
            "/api/v1/payments/:payment_id/capture",
            post(http::handlers::payments::capture),
        )
        .route(
            "/api/v1/payments/:payment_id/refund",
            post(http::handlers::payments::refund),
        )
        .route(
            "/api/v1/payments/webhooks/provider",
            post(http::handlers::webhooks::provider_webhook),
        )
        .with_state(state)
}
