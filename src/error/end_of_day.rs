use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// A reservation the end-of-day run could not transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationFailure {
    /// `None` when the worker task itself died before reporting.
    pub reservation_id: Option<i32>,
    pub reason: String,
}

impl fmt::Display for ReservationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reservation_id {
            Some(id) => write!(f, "reservation {}: {}", id, self.reason),
            None => write!(f, "unknown reservation: {}", self.reason),
        }
    }
}

#[derive(Error, Debug)]
pub enum EndOfDayError {
    /// Some reservations failed to transition, so the clock stayed on `business_date`.
    ///
    /// Re-running the end of day reprocesses exactly the records that still need it.
    #[error(
        "End of day for {business_date} incomplete: {} of {attempted} reservations failed",
        .failures.len()
    )]
    Incomplete {
        business_date: NaiveDate,
        attempted: usize,
        failures: Vec<ReservationFailure>,
    },
}
