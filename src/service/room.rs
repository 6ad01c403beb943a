//! Room registry: room lookup and occupancy primitives.
//!
//! Occupancy writes are shared between front-desk check-in/out and the end-of-day checkout
//! step. Both go through this service, which reads the room, validates the write and then
//! commits it with a version compare-and-set, so neither side can overwrite the other
//! unnoticed. Invariants are enforced per room only.

use sea_orm::ConnectionTrait;

use crate::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::{reservation::ReservationError, room::RoomError, AppError},
    model::room::{Room, SetOccupationParam},
};

/// Generic over the connection so the end-of-day run can release rooms inside the same
/// transaction that moves the reservation to `Passed`.
pub struct RoomRegistry<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRegistry<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a room by ID.
    ///
    /// # Returns
    /// - `Ok(Room)` - The room
    /// - `Err(RoomError::NotFound)` - No room with this ID
    pub async fn get_by_id(&self, room_id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .get_by_id(room_id)
            .await?
            .ok_or_else(|| RoomError::NotFound(room_id).into())
    }

    pub async fn count_rooms(&self) -> Result<u64, AppError> {
        RoomRepository::new(self.db).count().await
    }

    /// Marks a room occupied by a reservation, or frees it.
    ///
    /// Freeing always clears the reservation reference. Occupying requires a reference to an
    /// existing, open reservation, and the room must be free or already held by that same
    /// reservation.
    ///
    /// # Arguments
    /// - `param` - Room, desired occupancy and occupying reservation
    ///
    /// # Returns
    /// - `Ok(Room)` - The room as written
    /// - `Err(RoomError::MissingReservationReference)` - `occupied` without a reservation; nothing read or written
    /// - `Err(RoomError::NotFound)` - Unknown room
    /// - `Err(ReservationError::NotFound)` - Reservation missing or no longer open
    /// - `Err(RoomError::Occupied)` - Room held by a different reservation
    /// - `Err(RoomError::ConcurrentModification)` - Room changed between read and write
    pub async fn set_occupation(&self, param: SetOccupationParam) -> Result<Room, AppError> {
        let reservation_id = match (param.occupied, param.reservation_id) {
            (true, None) => {
                return Err(RoomError::MissingReservationReference(param.room_id).into())
            }
            (true, Some(reservation_id)) => Some(reservation_id),
            (false, _) => None,
        };

        let room = self.get_by_id(param.room_id).await?;

        if let Some(reservation_id) = reservation_id {
            let reservation = ReservationRepository::new(self.db)
                .get_by_id(reservation_id)
                .await?
                .filter(|reservation| !reservation.state.is_terminal())
                .ok_or(ReservationError::NotFound(reservation_id))?;

            if let Some(owner) = room.reservation_id.filter(|owner| *owner != reservation.id) {
                return Err(RoomError::Occupied {
                    room_id: room.id,
                    reservation_id: owner,
                }
                .into());
            }
        }

        self.write(room, reservation_id).await
    }

    /// Gets the reservation currently occupying a room.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The occupying reservation
    /// - `Ok(None)` - The room is free
    /// - `Err(RoomError::NotFound)` - Unknown room
    pub async fn get_occupation_owner(&self, room_id: i32) -> Result<Option<i32>, AppError> {
        Ok(self.get_by_id(room_id).await?.reservation_id)
    }

    /// Frees a room on checkout if it is still held by `reservation_id`.
    ///
    /// A room already freed or re-occupied by someone else is left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - The room was freed
    /// - `Ok(false)` - The room was not held by this reservation
    pub async fn release_for_reservation(
        &self,
        room_id: i32,
        reservation_id: i32,
    ) -> Result<bool, AppError> {
        let room = self.get_by_id(room_id).await?;

        if room.reservation_id != Some(reservation_id) {
            tracing::debug!(
                "Room {} not held by reservation {}, leaving occupancy as is",
                room_id,
                reservation_id
            );
            return Ok(false);
        }

        self.write(room, None).await?;

        Ok(true)
    }

    /// Frees every room currently held by `reservation_id`.
    ///
    /// Checkout goes by the rooms' occupant rather than the reservation's assigned room, so a
    /// guest checked in through `set_occupation` alone is released too.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of rooms freed
    /// - `Err(RoomError::ConcurrentModification)` - A room changed between read and write
    pub async fn release_held_by(&self, reservation_id: i32) -> Result<usize, AppError> {
        let rooms = RoomRepository::new(self.db)
            .get_by_occupant(reservation_id)
            .await?;
        let count = rooms.len();

        for room in rooms {
            self.write(room, None).await?;
        }

        Ok(count)
    }

    async fn write(&self, room: Room, reservation_id: Option<i32>) -> Result<Room, AppError> {
        let written = RoomRepository::new(self.db)
            .write_occupation(room.id, room.version, reservation_id)
            .await?;

        if !written {
            return Err(RoomError::ConcurrentModification(room.id).into());
        }

        match reservation_id {
            Some(reservation_id) => {
                tracing::info!("Room {} occupied by reservation {}", room.id, reservation_id)
            }
            None => tracing::info!("Room {} released", room.id),
        }

        Ok(Room {
            occupied: reservation_id.is_some(),
            reservation_id,
            version: room.version + 1,
            ..room
        })
    }
}
