//! Reservation ledger: booking, lookup and guarded lifecycle changes.
//!
//! Front-desk actions enter the lifecycle through `transition`, which only accepts the
//! explicit edges of `ReservationState::can_transition_to`. The date-driven edges are owned by
//! the end-of-day run.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        reservation::ReservationRepository, room::RoomRepository,
        room_allocation::RoomAllocationRepository,
    },
    error::{reservation::ReservationError, room::RoomError, AppError},
    model::{
        reservation::{CreateReservationParam, Reservation, ReservationState, UpdateContactParam},
        room::{allocation_span, RoomAllocation},
    },
    service::{clock::SystemClockService, room::RoomRegistry},
};

pub struct ReservationLedger<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationLedger<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a new reservation.
    ///
    /// The booking is validated against the current business date before anything is written.
    /// The reservation row, its nightly prices and its extras are then inserted in a single
    /// transaction.
    ///
    /// # Arguments
    /// - `param` - Booking details
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The booked reservation, `Pending` or `Arriving` for a same-day booking
    /// - `Err(ReservationError::Creation)` - Validation failed; nothing was persisted
    /// - `Err(ClockError::NotInitialized)` - No business date to validate against
    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, AppError> {
        let today = SystemClockService::new(self.db).current_date().await?;

        let end_date = param.validate(today)?;
        let state = param.initial_state(today);

        let txn = self.db.begin().await?;
        let reservation = ReservationRepository::new(&txn)
            .create(param, end_date, state)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Created reservation {} for guest {} ({} to {}, {})",
            reservation.id,
            reservation.guest_id,
            reservation.start_date,
            reservation.end_date,
            reservation.state
        );

        Ok(reservation)
    }

    /// Gets a reservation by ID.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation
    /// - `Err(ReservationError::NotFound)` - No reservation with this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| ReservationError::NotFound(id).into())
    }

    /// Gets all reservations of a guest; empty when the guest has none.
    pub async fn get_by_guest_id(&self, guest_id: i32) -> Result<Vec<Reservation>, AppError> {
        ReservationRepository::new(self.db)
            .get_by_guest_id(guest_id)
            .await
    }

    /// Gets all reservations assigned to a room.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Reservations assigned to the room, possibly empty
    /// - `Err(RoomError::NotFound)` - No room with this ID
    pub async fn get_by_room(&self, room_id: i32) -> Result<Vec<Reservation>, AppError> {
        if RoomRepository::new(self.db).get_by_id(room_id).await?.is_none() {
            return Err(RoomError::NotFound(room_id).into());
        }

        ReservationRepository::new(self.db).get_by_room(room_id).await
    }

    /// Gets reservations whose stay intersects `[from, to]`, both inclusive.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Matching reservations in any state
    /// - `Err(ReservationError::InvalidDateRange)` - `from` is after `to`
    pub async fn get_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        if from > to {
            return Err(ReservationError::InvalidDateRange { from, to }.into());
        }

        ReservationRepository::new(self.db)
            .get_by_date_range(from, to)
            .await
    }

    /// Updates a reservation's email and/or phone.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(ReservationError::NotFound)` - No reservation with this ID
    pub async fn update_contact(&self, param: UpdateContactParam) -> Result<Reservation, AppError> {
        let id = param.id;

        ReservationRepository::new(self.db)
            .update_contact(param)
            .await?
            .ok_or_else(|| ReservationError::NotFound(id).into())
    }

    /// Applies an explicit lifecycle transition, such as check-in or cancellation.
    ///
    /// Cancelling drops the reservation's room allocation. Moving to `Passed` or `Cancelled`
    /// also frees any room the reservation still occupies. All writes happen in
    /// one transaction, and the state write only succeeds if the state is still the one read.
    ///
    /// # Arguments
    /// - `id` - Reservation to transition
    /// - `to` - Target state
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation in its new state
    /// - `Err(ReservationError::NotFound)` - No reservation with this ID
    /// - `Err(ReservationError::InvalidTransition)` - No such edge, including any edge out of a terminal state
    /// - `Err(ReservationError::ConcurrentModification)` - The state changed while transitioning
    pub async fn transition(&self, id: i32, to: ReservationState) -> Result<Reservation, AppError> {
        let reservation = self.get_by_id(id).await?;
        let from = reservation.state;

        if !from.can_transition_to(to) {
            return Err(ReservationError::InvalidTransition { id, from, to }.into());
        }

        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        if !repo.update_state(id, from, to).await? {
            return Err(ReservationError::ConcurrentModification(id).into());
        }

        if to == ReservationState::Cancelled {
            RoomAllocationRepository::new(&txn)
                .delete_by_reservation(id)
                .await?;
        }

        if matches!(to, ReservationState::Passed | ReservationState::Cancelled) {
            RoomRegistry::new(&txn).release_held_by(id).await?;
        }

        let updated = repo
            .get_by_id(id)
            .await?
            .ok_or(ReservationError::NotFound(id))?;

        txn.commit().await?;

        tracing::info!("Reservation {} moved from {} to {}", id, from, to);

        Ok(updated)
    }

    /// Allocates a room to a reservation for the nights of its stay.
    ///
    /// Replaces any allocation the reservation already held. The overlap check and the write
    /// happen in one transaction; only allocations of other open reservations conflict.
    ///
    /// # Arguments
    /// - `reservation_id` - Reservation taking the room
    /// - `room_id` - Room to allocate
    ///
    /// # Returns
    /// - `Ok(RoomAllocation)` - The new allocation
    /// - `Err(ReservationError::NotFound)` - No reservation with this ID
    /// - `Err(ReservationError::Closed)` - The reservation is in a terminal state
    /// - `Err(RoomError::NotFound)` - No room with this ID
    /// - `Err(RoomError::AlreadyAllocated)` - Another open reservation holds the room for an overlapping stay
    /// - `Err(ClockError::DateOutOfRange)` - The stay has no representable span
    pub async fn assign_room(
        &self,
        reservation_id: i32,
        room_id: i32,
    ) -> Result<RoomAllocation, AppError> {
        let txn = self.db.begin().await?;
        let reservations = ReservationRepository::new(&txn);
        let allocations = RoomAllocationRepository::new(&txn);

        let reservation = reservations
            .get_by_id(reservation_id)
            .await?
            .ok_or(ReservationError::NotFound(reservation_id))?;

        if reservation.state.is_terminal() {
            return Err(ReservationError::Closed {
                id: reservation_id,
                state: reservation.state,
            }
            .into());
        }

        if RoomRepository::new(&txn).get_by_id(room_id).await?.is_none() {
            return Err(RoomError::NotFound(room_id).into());
        }

        let (start_date, end_date) =
            allocation_span(reservation.start_date, reservation.end_date)?;

        let conflicts = allocations
            .find_conflicts(room_id, start_date, end_date, reservation_id)
            .await?;
        if let Some(conflict) = conflicts.first() {
            return Err(RoomError::AlreadyAllocated {
                room_id,
                reservation_id: conflict.reservation_id,
            }
            .into());
        }

        // Replace any previous allocation of this reservation
        allocations.delete_by_reservation(reservation_id).await?;
        let allocation = allocations
            .create(room_id, reservation_id, start_date, end_date)
            .await?;
        reservations.set_room(reservation_id, Some(room_id)).await?;

        txn.commit().await?;

        tracing::info!(
            "Allocated room {} to reservation {} from {} until {}",
            room_id,
            reservation_id,
            start_date,
            end_date
        );

        Ok(allocation)
    }
}
