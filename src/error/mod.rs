//! Error types for the property-management core.
//!
//! `AppError` is the top-level error returned by services and the end-of-day run. It wraps the
//! domain-specific error enums of each component alongside infrastructure failures (database,
//! scheduler, configuration) so callers can match on the kind they care about and propagate the
//! rest with `?`.

pub mod clock;
pub mod config;
pub mod end_of_day;
pub mod internal;
pub mod reservation;
pub mod room;

use thiserror::Error;

use crate::error::{
    clock::ClockError, config::ConfigError, end_of_day::EndOfDayError, internal::InternalError,
    reservation::ReservationError, room::RoomError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` so repository and service code can use `?` directly.
/// Domain variants carry enough context to be surfaced to an operator unchanged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Stored data could not be mapped back into a domain model.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Business clock missing, out of range, or advanced concurrently.
    #[error(transparent)]
    ClockErr(#[from] ClockError),

    /// Reservation validation, lookup or lifecycle error.
    #[error(transparent)]
    ReservationErr(#[from] ReservationError),

    /// Room lookup or occupancy error.
    #[error(transparent)]
    RoomErr(#[from] RoomError),

    /// End-of-day run finished with per-reservation failures; the clock was not advanced.
    #[error(transparent)]
    EndOfDayErr(#[from] EndOfDayError),

    /// Internal failure with a custom message.
    #[error("{0}")]
    InternalError(String),
}
