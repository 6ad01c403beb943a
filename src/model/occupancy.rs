//! Occupancy statistics model.

use serde::Serialize;

/// Point-in-time reservation counts for the front-desk dashboard.
///
/// The counters are taken independently and are not guaranteed to be mutually consistent
/// while an end-of-day run or a check-in is in flight. No occupancy ratio is derived here;
/// how to normalise `occupancy` by `room_count` is still an open product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupancySnapshot {
    /// Reservations in the `Active` state.
    pub occupancy: u64,
    /// Reservations in the `Arriving` state.
    pub arrivals: u64,
    /// Reservations in the `Departing` state.
    pub departures: u64,
    /// Total number of rooms across all room types.
    pub room_count: u64,
}
