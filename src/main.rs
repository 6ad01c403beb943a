use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nightaudit::{
    config::Config,
    error::AppError,
    scheduler::end_of_day,
    service::{clock::SystemClockService, occupancy::OccupancyReporter},
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logger()?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let business_date = startup::initialize_clock(&db).await?;

    tracing::info!("Starting night audit on business date {}", business_date);

    let snapshot = OccupancyReporter::new(&db).get_occupancy_snapshot().await?;
    tracing::info!(
        "{} in house, {} arriving, {} departing across {} rooms",
        snapshot.occupancy,
        snapshot.arrivals,
        snapshot.departures,
        snapshot.room_count
    );

    let mut scheduler = end_of_day::start_scheduler(
        db.clone(),
        &config.end_of_day_schedule,
        config.end_of_day_concurrency,
    )
    .await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {}", e)))?;

    tracing::info!("Shutting down");

    scheduler.shutdown().await?;

    let business_date = SystemClockService::new(&db).current_date().await?;
    tracing::info!("Stopped on business date {}", business_date);

    Ok(())
}

fn init_logger() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))
}
