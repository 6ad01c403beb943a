use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A reservation row holds a state string no `ReservationState` maps to.
    ///
    /// Only reachable when the table was written outside of this crate.
    #[error("Unknown reservation state '{value}' stored for reservation {reservation_id}")]
    UnknownReservationState {
        /// Reservation whose row is corrupt
        reservation_id: i32,
        /// The stored value
        value: String,
    },

    /// A room row holds a housekeeping state string no `HousekeepingState` maps to.
    #[error("Unknown housekeeping state '{value}' stored for room {room_id}")]
    UnknownHousekeepingState {
        /// Room whose row is corrupt
        room_id: i32,
        /// The stored value
        value: String,
    },
}
