//! Room allocation data repository.
//!
//! An allocation binds one reservation to one room for a half-open span of days. The
//! overlap query only considers allocations whose reservation is still open, so rooms held
//! by cancelled, no-show or departed reservations can be sold again.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::{reservation::ReservationState, room::RoomAllocation};

pub struct RoomAllocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomAllocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an allocation.
    ///
    /// # Arguments
    /// - `room_id` - Room being allocated
    /// - `reservation_id` - Reservation taking the room; at most one allocation each
    /// - `start_date` - First blocked day
    /// - `end_date` - First day no longer blocked
    ///
    /// # Returns
    /// - `Ok(RoomAllocation)` - The created allocation
    /// - `Err(DbErr)` - Database error, including a second allocation for the reservation
    pub async fn create(
        &self,
        room_id: i32,
        reservation_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RoomAllocation, DbErr> {
        let allocation = entity::room_allocation::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            reservation_id: ActiveValue::Set(reservation_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomAllocation::from_entity(allocation))
    }

    pub async fn get_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Option<RoomAllocation>, DbErr> {
        Ok(entity::prelude::RoomAllocation::find()
            .filter(entity::room_allocation::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await?
            .map(RoomAllocation::from_entity))
    }

    /// Finds allocations of open reservations on `room_id` overlapping `[start_date, end_date)`.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `start_date` - First day of the requested span
    /// - `end_date` - Exclusive end of the requested span
    /// - `exclude_reservation_id` - Reservation whose own allocation is ignored
    pub async fn find_conflicts(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_reservation_id: i32,
    ) -> Result<Vec<RoomAllocation>, DbErr> {
        let open_states = ReservationState::OPEN.map(ReservationState::as_str);

        Ok(entity::prelude::RoomAllocation::find()
            .join(
                JoinType::InnerJoin,
                entity::room_allocation::Relation::Reservation.def(),
            )
            .filter(entity::room_allocation::Column::RoomId.eq(room_id))
            .filter(entity::room_allocation::Column::ReservationId.ne(exclude_reservation_id))
            .filter(entity::room_allocation::Column::StartDate.lt(end_date))
            .filter(entity::room_allocation::Column::EndDate.gt(start_date))
            .filter(entity::reservation::Column::State.is_in(open_states))
            .order_by_asc(entity::room_allocation::Column::StartDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(RoomAllocation::from_entity)
            .collect())
    }

    /// Deletes the allocation held by a reservation, if any.
    ///
    /// # Returns
    /// - `Ok(true)` - An allocation was removed
    /// - `Ok(false)` - The reservation held no allocation
    pub async fn delete_by_reservation(&self, reservation_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomAllocation::delete_many()
            .filter(entity::room_allocation::Column::ReservationId.eq(reservation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
