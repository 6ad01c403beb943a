use chrono::NaiveDate;
use thiserror::Error;

use crate::model::reservation::ReservationState;

#[derive(Error, Debug)]
pub enum ReservationError {
    /// Input validation failed; nothing was persisted.
    #[error("Reservation could not be created: {0}")]
    Creation(String),

    /// No reservation with this ID exists.
    #[error("Reservation {0} not found")]
    NotFound(i32),

    /// The lifecycle state machine has no edge between the two states.
    #[error("Reservation {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: i32,
        from: ReservationState,
        to: ReservationState,
    },

    /// The reservation is in a terminal state and can no longer be changed.
    #[error("Reservation {id} is {state} and can no longer be changed")]
    Closed { id: i32, state: ReservationState },

    /// The reservation changed state between being read and being written.
    #[error("Reservation {0} was modified concurrently")]
    ConcurrentModification(i32),

    /// Range query with `from` after `to`.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
}
