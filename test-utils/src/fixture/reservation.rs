//! Reservation fixtures for creating in-memory test data.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use entity::reservation;

/// Default arrival date of fixture reservations, 2026-01-10.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 10).unwrap_or_default()
}

/// Default stay length of fixture reservations.
pub const DEFAULT_NIGHT_COUNT: i32 = 2;

/// Creates a pending two-night reservation entity model with default values.
///
/// # Default Values
/// - id: `1`, guest_id: `1`
/// - start_date: `2026-01-10`, end_date: `2026-01-12`
/// - start/end time: `15:00` / `11:00`
/// - state: `"pending"`, no room
pub fn entity() -> reservation::Model {
    entity_builder().build()
}

/// Creates a reservation entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = fixture::reservation::entity_builder()
///     .state("departing")
///     .room_id(3)
///     .build();
/// ```
pub fn entity_builder() -> ReservationEntityBuilder {
    ReservationEntityBuilder::default()
}

/// Builder for creating customized reservation entity models.
///
/// `end_date` is always derived from `start_date` and `night_count`.
pub struct ReservationEntityBuilder {
    id: i32,
    guest_id: i32,
    start_date: NaiveDate,
    night_count: i32,
    room_id: Option<i32>,
    state: String,
}

impl Default for ReservationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            guest_id: 1,
            start_date: default_start_date(),
            night_count: DEFAULT_NIGHT_COUNT,
            room_id: None,
            state: "pending".to_string(),
        }
    }
}

impl ReservationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn guest_id(mut self, guest_id: i32) -> Self {
        self.guest_id = guest_id;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn night_count(mut self, night_count: i32) -> Self {
        self.night_count = night_count;
        self
    }

    pub fn room_id(mut self, room_id: i32) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Sets the raw stored state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn build(self) -> reservation::Model {
        let end_date = self
            .start_date
            .checked_add_days(Days::new(self.night_count.max(0) as u64))
            .unwrap_or(self.start_date);
        let created_at = DateTime::<Utc>::UNIX_EPOCH;

        reservation::Model {
            id: self.id,
            guest_id: self.guest_id,
            start_date: self.start_date,
            end_date,
            start_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default(),
            night_count: self.night_count,
            room_id: self.room_id,
            state: self.state,
            email: "guest@example.com".to_string(),
            phone: "+15550000000".to_string(),
            created_at,
            updated_at: created_at,
        }
    }
}
