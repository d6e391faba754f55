use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.payment_service.health("health"))
}

pub async fn liveness(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.payment_service.health("live"))
}

pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.payment_service.health("ready"))
}
