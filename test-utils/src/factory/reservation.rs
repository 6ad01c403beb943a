//! Reservation factory for creating test reservation entities.
//!
//! Inserts the reservation row together with one price row per night. The stored state is a
//! plain string so tests can start a reservation anywhere in its lifecycle.

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Default nightly rate in minor currency units.
pub const DEFAULT_NIGHTLY_PRICE: i64 = 10_000;

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, start_date)
///     .night_count(3)
///     .state("active")
///     .room_id(room.id)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    guest_id: i32,
    start_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    night_count: i32,
    prices: Option<Vec<i64>>,
    room_id: Option<i32>,
    state: String,
    email: String,
    phone: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - guest_id: auto-incremented
    /// - night_count: `1`
    /// - start/end time: `15:00` / `11:00`
    /// - prices: `DEFAULT_NIGHTLY_PRICE` for every night
    /// - state: `"pending"`
    /// - no room
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `start_date` - First day of the stay
    pub fn new(db: &'a DatabaseConnection, start_date: NaiveDate) -> Self {
        let id = next_id();
        Self {
            db,
            guest_id: id as i32,
            start_date,
            start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default(),
            night_count: 1,
            prices: None,
            room_id: None,
            state: "pending".to_string(),
            email: format!("guest{}@example.com", id),
            phone: format!("+1555{:07}", id),
        }
    }

    pub fn guest_id(mut self, guest_id: i32) -> Self {
        self.guest_id = guest_id;
        self
    }

    /// Sets the stay length; `end_date` is derived from it.
    pub fn night_count(mut self, night_count: i32) -> Self {
        self.night_count = night_count;
        self
    }

    pub fn times(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Sets explicit nightly prices instead of the default rate.
    pub fn prices(mut self, prices: Vec<i64>) -> Self {
        self.prices = Some(prices);
        self
    }

    /// Sets the stored lifecycle state, e.g. `"active"` or `"no_show"`.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Assigns the reservation to a room. Does not mark the room occupied.
    pub fn room_id(mut self, room_id: i32) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Builds and inserts the reservation and its nightly prices.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert, or a stay ending outside chrono's range
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let end_date = u64::try_from(self.night_count)
            .ok()
            .and_then(|nights| self.start_date.checked_add_days(Days::new(nights)))
            .ok_or_else(|| {
                DbErr::Custom(format!(
                    "Invalid stay of {} nights from {}",
                    self.night_count, self.start_date
                ))
            })?;
        let prices = self
            .prices
            .unwrap_or_else(|| vec![DEFAULT_NIGHTLY_PRICE; self.night_count.max(0) as usize]);
        let now = Utc::now();

        let reservation = entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            guest_id: ActiveValue::Set(self.guest_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(end_date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            night_count: ActiveValue::Set(self.night_count),
            room_id: ActiveValue::Set(self.room_id),
            state: ActiveValue::Set(self.state),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for (night_index, amount) in prices.into_iter().enumerate() {
            entity::reservation_price::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                night_index: ActiveValue::Set(night_index as i32),
                amount: ActiveValue::Set(amount),
            }
            .insert(self.db)
            .await?;
        }

        Ok(reservation)
    }
}

/// Creates a pending reservation of `night_count` nights starting on `start_date`.
///
/// Shorthand for `ReservationFactory::new(db, start_date).night_count(night_count).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    night_count: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, start_date)
        .night_count(night_count)
        .build()
        .await
}
