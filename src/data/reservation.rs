//! Reservation data repository.
//!
//! Reservations are stored across three tables: the reservation row itself, one row per
//! nightly price and one row per booked extra. The repository hides that split and always
//! returns fully assembled `Reservation` domain models.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    error::AppError,
    model::reservation::{CreateReservationParam, Reservation, ReservationState, UpdateContactParam},
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new ReservationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection pool or open transaction
    ///
    /// # Returns
    /// - `ReservationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation with its nightly prices and extras.
    ///
    /// Performs several inserts; callers wanting all-or-nothing semantics must pass a
    /// transaction. Input is assumed to be validated already.
    ///
    /// # Arguments
    /// - `param` - Booking details
    /// - `end_date` - Derived departure day
    /// - `state` - Initial lifecycle state
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with generated ID
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateReservationParam,
        end_date: NaiveDate,
        state: ReservationState,
    ) -> Result<Reservation, AppError> {
        let now = Utc::now();
        let reservation = entity::reservation::ActiveModel {
            guest_id: ActiveValue::Set(param.guest_id),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(end_date),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            night_count: ActiveValue::Set(param.night_count),
            room_id: ActiveValue::Set(None),
            state: ActiveValue::Set(state.as_str().to_string()),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (night_index, amount) in param.prices.iter().enumerate() {
            entity::reservation_price::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                night_index: ActiveValue::Set(night_index as i32),
                amount: ActiveValue::Set(*amount),
            }
            .insert(self.db)
            .await?;
        }

        for extra_id in &param.extra_ids {
            entity::reservation_extra::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                extra_id: ActiveValue::Set(*extra_id),
            }
            .insert(self.db)
            .await?;
        }

        let mut extra_ids = param.extra_ids;
        extra_ids.sort_unstable();

        Ok(Reservation::from_entity(reservation, param.prices, extra_ids)?)
    }

    /// Gets a reservation by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The reservation
    /// - `Ok(None)` - No reservation with this ID
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        let Some(model) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.assemble(vec![model]).await?.pop())
    }

    /// Gets all reservations of a guest, oldest stay first.
    pub async fn get_by_guest_id(&self, guest_id: i32) -> Result<Vec<Reservation>, AppError> {
        let models = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::GuestId.eq(guest_id))
            .order_by_asc(entity::reservation::Column::StartDate)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(models).await
    }

    /// Gets all reservations assigned to a room, oldest stay first.
    pub async fn get_by_room(&self, room_id: i32) -> Result<Vec<Reservation>, AppError> {
        let models = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .order_by_asc(entity::reservation::Column::StartDate)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(models).await
    }

    /// Gets reservations whose `[start_date, end_date]` window intersects `[from, to]`.
    ///
    /// Both bounds are inclusive. Terminal reservations are included.
    pub async fn get_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        let models = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::StartDate.lte(to))
            .filter(entity::reservation::Column::EndDate.gte(from))
            .order_by_asc(entity::reservation::Column::StartDate)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(models).await
    }

    /// Gets the open reservations an end-of-day run from `current` to `next` must evaluate.
    ///
    /// Selects reservations in an open state with `start_date <= next` whose stay window
    /// reaches `current` (`end_date >= current`). Including `current` lets the run see
    /// departures that became overdue and same-day stays whose guest never arrived.
    ///
    /// In-house guests (`Active`, `Departing`) are selected regardless of `end_date`, so a
    /// stay that ran past its window is still checked out.
    pub async fn get_end_of_day_candidates(
        &self,
        current: NaiveDate,
        next: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        let open_states = ReservationState::OPEN.map(ReservationState::as_str);
        let in_house_states = ReservationState::IN_HOUSE.map(ReservationState::as_str);

        let models = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::State.is_in(open_states))
            .filter(entity::reservation::Column::StartDate.lte(next))
            .filter(
                Condition::any()
                    .add(entity::reservation::Column::EndDate.gte(current))
                    .add(entity::reservation::Column::State.is_in(in_house_states)),
            )
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(models).await
    }

    /// Counts reservations currently in `state`.
    pub async fn count_by_state(&self, state: ReservationState) -> Result<u64, AppError> {
        Ok(entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::State.eq(state.as_str()))
            .count(self.db)
            .await?)
    }

    /// Writes `to` as the reservation's state if it still holds `expected`.
    ///
    /// The row is written even when `to == expected` so that `updated_at` records the pass.
    ///
    /// # Returns
    /// - `Ok(true)` - State written
    /// - `Ok(false)` - The reservation no longer holds `expected` (or does not exist)
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_state(
        &self,
        id: i32,
        expected: ReservationState,
        to: ReservationState,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Reservation::update_many()
            .set(entity::reservation::ActiveModel {
                state: ActiveValue::Set(to.as_str().to_string()),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::State.eq(expected.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets or clears the room a reservation is assigned to.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation updated
    /// - `Ok(false)` - No reservation with this ID
    pub async fn set_room(&self, id: i32, room_id: Option<i32>) -> Result<bool, AppError> {
        let result = entity::prelude::Reservation::update_many()
            .set(entity::reservation::ActiveModel {
                room_id: ActiveValue::Set(room_id),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::reservation::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Updates contact details; fields left as `None` keep their value.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The updated reservation
    /// - `Ok(None)` - No reservation with this ID
    pub async fn update_contact(
        &self,
        param: UpdateContactParam,
    ) -> Result<Option<Reservation>, AppError> {
        let Some(model) = entity::prelude::Reservation::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::reservation::ActiveModel = model.into();
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Ok(self.assemble(vec![model]).await?.pop())
    }

    /// Loads prices and extras for `models` in two queries and builds domain models.
    async fn assemble(
        &self,
        models: Vec<entity::reservation::Model>,
    ) -> Result<Vec<Reservation>, AppError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|model| model.id).collect();

        let mut prices: HashMap<i32, Vec<i64>> = HashMap::new();
        for price in entity::prelude::ReservationPrice::find()
            .filter(entity::reservation_price::Column::ReservationId.is_in(ids.clone()))
            .order_by_asc(entity::reservation_price::Column::ReservationId)
            .order_by_asc(entity::reservation_price::Column::NightIndex)
            .all(self.db)
            .await?
        {
            prices
                .entry(price.reservation_id)
                .or_default()
                .push(price.amount);
        }

        let mut extras: HashMap<i32, Vec<i32>> = HashMap::new();
        for extra in entity::prelude::ReservationExtra::find()
            .filter(entity::reservation_extra::Column::ReservationId.is_in(ids))
            .order_by_asc(entity::reservation_extra::Column::ReservationId)
            .order_by_asc(entity::reservation_extra::Column::ExtraId)
            .all(self.db)
            .await?
        {
            extras
                .entry(extra.reservation_id)
                .or_default()
                .push(extra.extra_id);
        }

        models
            .into_iter()
            .map(|model| {
                let model_prices = prices.remove(&model.id).unwrap_or_default();
                let model_extras = extras.remove(&model.id).unwrap_or_default();
                Reservation::from_entity(model, model_prices, model_extras).map_err(AppError::from)
            })
            .collect()
    }
}
