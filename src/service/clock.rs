//! Business-date clock.
//!
//! The hotel's business date is independent of wall-clock time and only moves when an
//! end-of-day run completes. It is stored as a single row; this service is the only code
//! that reads or writes it, and callers receive it explicitly rather than through a global.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::system_clock::SystemClockRepository,
    error::{clock::ClockError, AppError},
};

pub struct SystemClockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemClockService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the clock with `today` unless it already exists.
    ///
    /// Safe to call on every boot. When two processes race to create the row, the loser
    /// reads back the winner's date instead of failing.
    ///
    /// # Arguments
    /// - `today` - Date to seed with, normally the host's local date
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - The stored business date, seeded or pre-existing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn initialize(&self, today: NaiveDate) -> Result<NaiveDate, AppError> {
        let repo = SystemClockRepository::new(self.db);

        if let Some(date) = repo.get().await? {
            tracing::debug!("System clock already initialized at {}", date);
            return Ok(date);
        }

        match repo.insert(today).await {
            Ok(date) => {
                tracing::info!("Initialized system clock at {}", date);
                Ok(date)
            }
            Err(err) => match repo.get().await? {
                Some(date) => Ok(date),
                None => Err(err.into()),
            },
        }
    }

    /// Gets the current business date.
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - The business date
    /// - `Err(ClockError::NotInitialized)` - The clock row does not exist
    pub async fn current_date(&self) -> Result<NaiveDate, AppError> {
        SystemClockRepository::new(self.db)
            .get()
            .await?
            .ok_or_else(|| ClockError::NotInitialized.into())
    }

    /// Advances the business date by one day from whatever it currently is.
    pub async fn advance_one_day(&self) -> Result<NaiveDate, AppError> {
        let current = self.current_date().await?;
        self.advance_from(current).await
    }

    /// Advances the business date from `expected` to the following day.
    ///
    /// The write is a compare-and-set: if the clock no longer reads `expected` nothing is
    /// written, so a date is never advanced twice.
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - The new business date
    /// - `Err(ClockError::ConcurrentAdvance)` - The clock moved since `expected` was read
    /// - `Err(ClockError::NotInitialized)` - The clock row does not exist
    /// - `Err(ClockError::DateOutOfRange)` - `expected` is the last representable date
    pub async fn advance_from(&self, expected: NaiveDate) -> Result<NaiveDate, AppError> {
        let next = next_business_date(expected)?;
        let repo = SystemClockRepository::new(self.db);

        if !repo.compare_and_set(expected, next).await? {
            let err = match repo.get().await? {
                None => ClockError::NotInitialized,
                Some(_) => ClockError::ConcurrentAdvance { expected },
            };
            return Err(err.into());
        }

        Ok(next)
    }
}

/// The day after `date`.
pub fn next_business_date(date: NaiveDate) -> Result<NaiveDate, ClockError> {
    date.succ_opt().ok_or(ClockError::DateOutOfRange(date))
}
