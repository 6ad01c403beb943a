use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
    /// No room with this ID exists.
    #[error("Room {0} not found")]
    NotFound(i32),

    /// Marking a room occupied requires the reservation that occupies it.
    #[error("Room {0} cannot be marked occupied without a reservation reference")]
    MissingReservationReference(i32),

    /// The room is already bound to another reservation.
    #[error("Room {room_id} is already occupied by reservation {reservation_id}")]
    Occupied { room_id: i32, reservation_id: i32 },

    /// Another open reservation holds an allocation overlapping the requested stay.
    #[error("Room {room_id} is already allocated to reservation {reservation_id} for an overlapping stay")]
    AlreadyAllocated { room_id: i32, reservation_id: i32 },

    /// The room row changed between read and write.
    #[error("Room {0} was modified concurrently")]
    ConcurrentModification(i32),
}
