use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bookings_mock::config::AppConfig;
use bookings_mock::router;
use bookings_mock::services::BookingService;
use bookings_mock::state::AppState;
use bookings_mock::store::BookingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let bookings = BookingService::new(Arc::new(BookingStore::new()));
    if config.seed_bookings {
        bookings.seed()?;
    } else {
        tracing::info!("SEED_BOOKINGS disabled, starting with an empty store");
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState { bookings });
    let app = router::app(state);

    tracing::info!("mock bookings server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
