//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including ID
//! generation and convenience methods for creating entities with their dependencies.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    reservation::ReservationFactory,
    room::{create_room, set_occupant},
    room_type::create_room_type,
};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room type and one free room of that type.
///
/// # Returns
/// - `Ok((room_type, room))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_type(
    db: &DatabaseConnection,
) -> Result<(entity::room_type::Model, entity::room::Model), DbErr> {
    let room_type = create_room_type(db).await?;
    let room = create_room(db, room_type.id).await?;

    Ok((room_type, room))
}

/// Creates `count` free rooms sharing one room type.
pub async fn create_rooms(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::room::Model>, DbErr> {
    let room_type = create_room_type(db).await?;

    let mut rooms = Vec::with_capacity(count);
    for _ in 0..count {
        rooms.push(create_room(db, room_type.id).await?);
    }

    Ok(rooms)
}

/// Creates a guest who has checked in: an `active` reservation assigned to a room that it
/// occupies.
///
/// This is a convenience method that creates:
/// 1. Room type
/// 2. Room
/// 3. Active reservation assigned to the room
/// 4. Occupancy of the room by the reservation
///
/// # Arguments
/// - `db` - Database connection
/// - `start_date` - First day of the stay
/// - `night_count` - Length of the stay
///
/// # Returns
/// - `Ok((room_type, room, reservation))` - The room as occupied, and the reservation
/// - `Err(DbErr)` - Database error during creation
pub async fn create_checked_in_reservation(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    night_count: i32,
) -> Result<
    (
        entity::room_type::Model,
        entity::room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (room_type, room) = create_room_with_type(db).await?;

    let reservation = ReservationFactory::new(db, start_date)
        .night_count(night_count)
        .state("active")
        .room_id(room.id)
        .build()
        .await?;

    let room = set_occupant(db, room.id, Some(reservation.id)).await?;

    Ok((room_type, room, reservation))
}
