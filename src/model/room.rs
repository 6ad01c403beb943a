//! Domain models for rooms, room types and room allocations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{clock::ClockError, internal::InternalError};

/// Housekeeping condition of a room, independent of whether it is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HousekeepingState {
    Clean,
    Inspected,
    Dirty,
    OutOfOrder,
}

impl HousekeepingState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Inspected => "inspected",
            Self::Dirty => "dirty",
            Self::OutOfOrder => "out_of_order",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "clean" => Some(Self::Clean),
            "inspected" => Some(Self::Inspected),
            "dirty" => Some(Self::Dirty),
            "out_of_order" => Some(Self::OutOfOrder),
            _ => None,
        }
    }
}

/// A physical room and its current occupancy binding.
///
/// `occupied` is true exactly when `reservation_id` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: i32,
    pub type_id: i32,
    pub housekeeping_state: HousekeepingState,
    pub occupied: bool,
    pub reservation_id: Option<i32>,
    /// Optimistic-concurrency counter, bumped on every occupancy write.
    pub version: i32,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Room)` - The converted room
    /// - `Err(InternalError::UnknownHousekeepingState)` - The stored state is not recognised
    pub fn from_entity(entity: entity::room::Model) -> Result<Self, InternalError> {
        let housekeeping_state = HousekeepingState::parse(&entity.housekeeping_state)
            .ok_or_else(|| InternalError::UnknownHousekeepingState {
                room_id: entity.id,
                value: entity.housekeeping_state.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            type_id: entity.type_id,
            housekeeping_state,
            occupied: entity.occupied,
            reservation_id: entity.reservation_id,
            version: entity.version,
        })
    }
}

/// Parameters for registering a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomParam {
    pub type_id: i32,
    pub housekeeping_state: HousekeepingState,
}

/// Category of rooms sharing a code and description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomType {
    pub id: i32,
    pub code: String,
    pub description: String,
}

impl RoomType {
    pub fn from_entity(entity: entity::room_type::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomTypeParam {
    pub code: String,
    pub description: String,
}

/// Parameters for a front-desk occupancy write.
#[derive(Debug, Clone, Copy)]
pub struct SetOccupationParam {
    pub room_id: i32,
    pub occupied: bool,
    /// Required when `occupied` is true, ignored otherwise.
    pub reservation_id: Option<i32>,
}

/// A reservation's claim on a room for the nights of its stay.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomAllocation {
    pub id: i32,
    pub room_id: i32,
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    /// Exclusive.
    pub end_date: NaiveDate,
}

impl RoomAllocation {
    pub fn from_entity(entity: entity::room_allocation::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            reservation_id: entity.reservation_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }
}

/// Half-open `[start, end)` span of days a stay blocks its room for.
///
/// A same-day stay (`start_date == end_date`) still blocks its start date.
///
/// # Returns
/// - `Ok((start, end))` - The span, never empty
/// - `Err(ClockError::DateOutOfRange)` - A same-day stay on the last representable date
pub fn allocation_span(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), ClockError> {
    if end_date > start_date {
        return Ok((start_date, end_date));
    }

    let day_after = start_date
        .succ_opt()
        .ok_or(ClockError::DateOutOfRange(start_date))?;

    Ok((start_date, day_after))
}
