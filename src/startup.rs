use chrono::{Local, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{config::Config, error::AppError, service::clock::SystemClockService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is current before
/// the clock or the scheduler touch it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure a business date exists, seeding it with the host's local date on first boot.
///
/// # Returns
/// - `Ok(NaiveDate)` - The business date the process starts on
/// - `Err(AppError::DbErr)` - Database error
pub async fn initialize_clock(db: &DatabaseConnection) -> Result<NaiveDate, AppError> {
    let today = Local::now().date_naive();

    let business_date = SystemClockService::new(db).initialize(today).await?;

    if business_date != today {
        tracing::info!(
            "Business date is {} while the host date is {}",
            business_date,
            today
        );
    }

    Ok(business_date)
}
