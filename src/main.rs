use payment_service::config::AppConfig;
use payment_service::repo::payments_repo::PaymentsRepo;
use payment_service::service::payment_service::PaymentService;
use payment_service::{router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let payments_repo = PaymentsRepo::new();
    let payment_service = PaymentService { payments_repo };

    let state = AppState { payment_service };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
