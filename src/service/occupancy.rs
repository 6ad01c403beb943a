use sea_orm::DatabaseConnection;

use crate::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{occupancy::OccupancySnapshot, reservation::ReservationState},
};

pub struct OccupancyReporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OccupancyReporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts in-house guests, expected arrivals, expected departures and rooms.
    ///
    /// The four counts run concurrently and are not taken from a single snapshot, so a
    /// transition committed mid-query may show up in one count but not another.
    ///
    /// # Returns
    /// - `Ok(OccupancySnapshot)` - Active, Arriving and Departing reservation counts plus the room total
    /// - `Err(AppError::DbErr)` - Database error in any of the counts
    pub async fn get_occupancy_snapshot(&self) -> Result<OccupancySnapshot, AppError> {
        let reservations = ReservationRepository::new(self.db);
        let rooms = RoomRepository::new(self.db);

        let (occupancy, arrivals, departures, room_count) = tokio::try_join!(
            reservations.count_by_state(ReservationState::Active),
            reservations.count_by_state(ReservationState::Arriving),
            reservations.count_by_state(ReservationState::Departing),
            rooms.count(),
        )?;

        Ok(OccupancySnapshot {
            occupancy,
            arrivals,
            departures,
            room_count,
        })
    }
}
