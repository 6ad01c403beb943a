//! End-of-day run: the daily business-date tick.
//!
//! One run evaluates every open reservation whose stay touches the day being closed or the
//! day being opened, moves each through its date-driven lifecycle edge, releases rooms of
//! overdue departures and finally advances the business clock by one day.
//!
//! Reservations are processed as independent units of work, each in its own transaction,
//! running concurrently up to a configured limit. Unit failures are collected rather than
//! aborting the run. The clock only moves once every unit has committed, so a failed run
//! leaves the business date unchanged and can simply be run again: units that already
//! committed re-evaluate to the same state, and the rest pick up where they failed.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;
use tokio::{sync::Semaphore, task::JoinSet};

use crate::{
    data::reservation::ReservationRepository,
    error::{
        end_of_day::{EndOfDayError, ReservationFailure},
        reservation::ReservationError,
        AppError,
    },
    model::reservation::{Reservation, Transition},
    service::{
        clock::{next_business_date, SystemClockService},
        room::RoomRegistry,
    },
};

/// Default number of reservations processed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

pub struct EndOfDayProcessor<'a> {
    db: &'a DatabaseConnection,
    concurrency: usize,
}

impl<'a> EndOfDayProcessor<'a> {
    /// Creates a processor running at most `concurrency` reservation units at once.
    ///
    /// A concurrency of zero is treated as one.
    pub fn new(db: &'a DatabaseConnection, concurrency: usize) -> Self {
        Self {
            db,
            concurrency: concurrency.max(1),
        }
    }

    /// Closes the current business day.
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - The new business date
    /// - `Err(ClockError::NotInitialized)` - No business date; nothing was written
    /// - `Err(ClockError::DateOutOfRange)` - The business date cannot advance further
    /// - `Err(EndOfDayError::Incomplete)` - Some reservations failed; the clock was not advanced
    /// - `Err(ClockError::ConcurrentAdvance)` - Another run advanced the clock first
    pub async fn run_end_of_day(&self) -> Result<NaiveDate, AppError> {
        let clock = SystemClockService::new(self.db);

        let current = clock.current_date().await?;
        let next = next_business_date(current)?;

        let candidates = ReservationRepository::new(self.db)
            .get_end_of_day_candidates(current, next)
            .await?;
        let attempted = candidates.len();

        tracing::info!(
            "Running end of day {} -> {} for {} reservations",
            current,
            next,
            attempted
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut units = JoinSet::new();

        for reservation in candidates {
            let db = self.db.clone();
            let semaphore = semaphore.clone();

            units.spawn(async move {
                let reservation_id = reservation.id;

                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => process_reservation(&db, reservation, next).await,
                    Err(e) => Err(AppError::InternalError(format!(
                        "End-of-day worker pool closed: {}",
                        e
                    ))),
                };

                (reservation_id, result)
            });
        }

        let mut changed = 0usize;
        let mut failures = Vec::new();

        while let Some(joined) = units.join_next().await {
            match joined {
                Ok((_, Ok(transition))) => {
                    if transition.is_change() {
                        changed += 1;
                    }
                }
                Ok((reservation_id, Err(e))) => {
                    tracing::warn!(
                        "End of day failed for reservation {}: {}",
                        reservation_id,
                        e
                    );
                    failures.push(ReservationFailure {
                        reservation_id: Some(reservation_id),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!("End-of-day worker task failed: {}", e);
                    failures.push(ReservationFailure {
                        reservation_id: None,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if !failures.is_empty() {
            failures.sort_by_key(|failure| failure.reservation_id);

            tracing::error!(
                "End of day for {} incomplete: {} of {} reservations failed, business date unchanged",
                current,
                failures.len(),
                attempted
            );

            return Err(EndOfDayError::Incomplete {
                business_date: current,
                attempted,
                failures,
            }
            .into());
        }

        let new_date = clock.advance_from(current).await?;

        tracing::info!(
            "End of day complete: business date is now {} ({} of {} reservations changed state)",
            new_date,
            changed,
            attempted
        );

        Ok(new_date)
    }
}

/// Applies the end-of-day rules to one reservation in its own transaction.
///
/// The state is written back even when unchanged. The write only succeeds if the stored
/// state still matches the one the run read.
async fn process_reservation(
    db: &DatabaseConnection,
    reservation: Reservation,
    business_date: NaiveDate,
) -> Result<Transition, AppError> {
    let transition = reservation.end_of_day_transition(business_date);

    let txn = db.begin().await?;

    let written = ReservationRepository::new(&txn)
        .update_state(reservation.id, transition.from, transition.to)
        .await?;
    if !written {
        return Err(ReservationError::ConcurrentModification(reservation.id).into());
    }

    if transition.releases_room() {
        RoomRegistry::new(&txn)
            .release_held_by(reservation.id)
            .await?;
    }

    txn.commit().await?;

    if transition.is_change() {
        tracing::debug!(
            "Reservation {} moved from {} to {}",
            reservation.id,
            transition.from,
            transition.to
        );
    }

    Ok(transition)
}
