use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::end_of_day::EndOfDayProcessor};

/// Starts the end-of-day scheduler
///
/// Runs the end of day on `schedule`. A tick that fires while the previous run is still in
/// flight is skipped, so at most one run is active per process. Runs in other processes are
/// caught by the clock's compare-and-set instead.
///
/// # Arguments
/// - `db`: Database connection
/// - `schedule`: Cron expression with a seconds field, e.g. `0 0 3 * * *`
/// - `concurrency`: Reservations processed concurrently per run
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler; keep it alive for the jobs to fire
/// - `Err(AppError::SchedulerErr)`: Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    schedule: &str,
    concurrency: usize,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let in_flight = Arc::new(Mutex::new(()));

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let in_flight = in_flight.clone();

        Box::pin(async move {
            let Ok(_guard) = in_flight.try_lock() else {
                tracing::warn!("Previous end of day still running, skipping this tick");
                return;
            };

            if let Err(e) = run_end_of_day(&db, concurrency).await {
                tracing::error!("End of day failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("End-of-day scheduler started ({})", schedule);

    Ok(scheduler)
}

async fn run_end_of_day(db: &DatabaseConnection, concurrency: usize) -> Result<(), AppError> {
    let new_date = EndOfDayProcessor::new(db, concurrency)
        .run_end_of_day()
        .await?;

    tracing::info!("Scheduled end of day finished, business date {}", new_date);

    Ok(())
}
