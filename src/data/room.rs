//! Room data repository.
//!
//! Occupancy writes go through `write_occupation`, a compare-and-set on the room's
//! `version` column. Callers read the room, decide, and write back against the version
//! they read; a concurrent front-desk or end-of-day write makes the second writer fail
//! instead of silently overwriting the first.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::{
    error::AppError,
    model::room::{CreateRoomParam, Room},
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a new, unoccupied room.
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(AppError::DbErr)` - Database error, e.g. unknown room type
    pub async fn create(&self, param: CreateRoomParam) -> Result<Room, AppError> {
        let room = entity::room::ActiveModel {
            type_id: ActiveValue::Set(param.type_id),
            housekeeping_state: ActiveValue::Set(param.housekeeping_state.as_str().to_string()),
            occupied: ActiveValue::Set(false),
            reservation_id: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(room)?)
    }

    /// Gets a room by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - The room
    /// - `Ok(None)` - No room with this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, AppError> {
        entity::prelude::Room::find_by_id(id)
            .one(self.db)
            .await?
            .map(Room::from_entity)
            .transpose()
            .map_err(AppError::from)
    }

    /// Gets the rooms currently occupied by `reservation_id`.
    pub async fn get_by_occupant(&self, reservation_id: i32) -> Result<Vec<Room>, AppError> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::ReservationId.eq(reservation_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|room| Room::from_entity(room).map_err(AppError::from))
            .collect()
    }

    /// Counts all rooms.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::Room::find().count(self.db).await?)
    }

    /// Binds the room to `reservation_id`, or frees it when `None`, if its version is still
    /// `expected_version`.
    ///
    /// `occupied` is derived from `reservation_id` so the two can never disagree.
    ///
    /// # Returns
    /// - `Ok(true)` - Written; the room's version is now `expected_version + 1`
    /// - `Ok(false)` - The room changed since it was read (or does not exist)
    pub async fn write_occupation(
        &self,
        id: i32,
        expected_version: i32,
        reservation_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Room::update_many()
            .set(entity::room::ActiveModel {
                occupied: ActiveValue::Set(reservation_id.is_some()),
                reservation_id: ActiveValue::Set(reservation_id),
                version: ActiveValue::Set(expected_version + 1),
                ..Default::default()
            })
            .filter(entity::room::Column::Id.eq(id))
            .filter(entity::room::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
