//! Domain models for reservations and their lifecycle.
//!
//! `ReservationState` encodes the lifecycle state machine: the edges front-desk actions may
//! take explicitly, and the date-driven edges the end-of-day run takes implicitly. Both live
//! here as pure functions so the data and service layers only persist their outcome.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{internal::InternalError, reservation::ReservationError};

/// Lifecycle state of a reservation.
///
/// `Pending → Arriving → Active → Departing → Passed` is the happy path. `NoShow` branches off
/// `Arriving`, and every open state may be `Cancelled`. `Passed`, `NoShow` and `Cancelled` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationState {
    Pending,
    Arriving,
    Active,
    Departing,
    Passed,
    NoShow,
    Cancelled,
}

impl ReservationState {
    /// States from which a further transition is defined.
    pub const OPEN: [ReservationState; 4] = [
        ReservationState::Pending,
        ReservationState::Arriving,
        ReservationState::Active,
        ReservationState::Departing,
    ];

    /// Checked-in guests; they stay in the end-of-day scan until they have left.
    pub const IN_HOUSE: [ReservationState; 2] =
        [ReservationState::Active, ReservationState::Departing];

    pub const TERMINAL: [ReservationState; 3] = [
        ReservationState::Passed,
        ReservationState::NoShow,
        ReservationState::Cancelled,
    ];

    /// Value stored in the `state` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Arriving => "arriving",
            Self::Active => "active",
            Self::Departing => "departing",
            Self::Passed => "passed",
            Self::NoShow => "no_show",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a stored `state` column value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "arriving" => Some(Self::Arriving),
            "active" => Some(Self::Active),
            "departing" => Some(Self::Departing),
            "passed" => Some(Self::Passed),
            "no_show" => Some(Self::NoShow),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }

    /// Whether an explicit (front-desk or operator) transition from `self` to `to` is allowed.
    ///
    /// Covers the date-driven edges as well, since an operator may need to apply one by hand,
    /// plus check-in (`Arriving → Active`), early checkout (`Active → Passed`) and
    /// cancellation from any open state. Nothing leaves a terminal state.
    pub fn can_transition_to(self, to: Self) -> bool {
        use ReservationState::*;

        matches!(
            (self, to),
            (Pending, Arriving)
                | (Arriving, Active)
                | (Arriving, NoShow)
                | (Active, Departing)
                | (Active, Passed)
                | (Departing, Passed)
                | (Pending | Arriving | Active | Departing, Cancelled)
        )
    }

    /// State a reservation moves to when the business date becomes `business_date`.
    ///
    /// # Arguments
    /// - `business_date` - The date the clock is being advanced to
    /// - `start_date` - First day of the stay
    /// - `end_date` - Departure day (`start_date + night_count`)
    ///
    /// # Returns
    /// - The new state, or `self` when no date-driven rule applies
    pub fn on_business_date(
        self,
        business_date: NaiveDate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        use ReservationState::*;

        match self {
            Pending if business_date == start_date => Arriving,
            Arriving if business_date > start_date => NoShow,
            // An overdue guest (same-day stay, late check-in) departs on the next run
            Active if business_date >= end_date => Departing,
            Departing if business_date > end_date => Passed,
            state => state,
        }
    }
}

impl fmt::Display for ReservationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating the end-of-day rules for one reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ReservationState,
    pub to: ReservationState,
}

impl Transition {
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }

    /// Overdue departure forcing checkout; every room it occupies must be released.
    pub fn releases_room(&self) -> bool {
        self.from == ReservationState::Departing && self.to == ReservationState::Passed
    }
}

/// Departure day of a stay starting on `start_date` lasting `night_count` nights.
///
/// Returns `None` for a negative night count or when the date overflows.
pub fn stay_end(start_date: NaiveDate, night_count: i32) -> Option<NaiveDate> {
    let nights = u64::try_from(night_count).ok()?;
    start_date.checked_add_days(Days::new(nights))
}

/// A reservation with its nightly prices and booked extras.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub id: i32,
    /// Guest record owned by the guest-management collaborator.
    pub guest_id: i32,
    pub start_date: NaiveDate,
    /// `start_date + night_count`.
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub night_count: i32,
    /// One amount per night, in minor currency units.
    pub prices: Vec<i64>,
    pub room_id: Option<i32>,
    pub state: ReservationState,
    pub extra_ids: Vec<i32>,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model plus its child rows to a reservation domain model.
    ///
    /// # Arguments
    /// - `entity` - The reservation row
    /// - `prices` - Nightly amounts ordered by night index
    /// - `extra_ids` - IDs of booked extras
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The converted reservation
    /// - `Err(InternalError::UnknownReservationState)` - The stored state is not recognised
    pub fn from_entity(
        entity: entity::reservation::Model,
        prices: Vec<i64>,
        extra_ids: Vec<i32>,
    ) -> Result<Self, InternalError> {
        let state = ReservationState::parse(&entity.state).ok_or_else(|| {
            InternalError::UnknownReservationState {
                reservation_id: entity.id,
                value: entity.state.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            guest_id: entity.guest_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            night_count: entity.night_count,
            prices,
            room_id: entity.room_id,
            state,
            extra_ids,
            email: entity.email,
            phone: entity.phone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Evaluates the end-of-day rules against the date the clock is moving to.
    pub fn end_of_day_transition(&self, business_date: NaiveDate) -> Transition {
        Transition {
            from: self.state,
            to: self
                .state
                .on_business_date(business_date, self.start_date, self.end_date),
        }
    }
}

/// Parameters for booking a new reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub night_count: i32,
    /// One amount per night, in minor currency units.
    pub prices: Vec<i64>,
    pub extra_ids: Vec<i32>,
    pub email: String,
    pub phone: String,
}

impl CreateReservationParam {
    /// Checks the booking rules against the current business date.
    ///
    /// # Arguments
    /// - `today` - Current business date
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - The derived departure day
    /// - `Err(ReservationError::Creation)` - The first rule the booking violates
    pub fn validate(&self, today: NaiveDate) -> Result<NaiveDate, ReservationError> {
        if self.start_date < today {
            return Err(ReservationError::Creation(format!(
                "start date {} is before the current business date {}",
                self.start_date, today
            )));
        }
        if self.night_count < 0 {
            return Err(ReservationError::Creation(format!(
                "night count must not be negative, got {}",
                self.night_count
            )));
        }
        if self.night_count == 0 && self.start_time > self.end_time {
            return Err(ReservationError::Creation(format!(
                "same-day stay ends at {} before it starts at {}",
                self.end_time, self.start_time
            )));
        }
        if self.prices.len() != self.night_count as usize {
            return Err(ReservationError::Creation(format!(
                "expected {} nightly prices, got {}",
                self.night_count,
                self.prices.len()
            )));
        }
        if let Some((night, amount)) = self
            .prices
            .iter()
            .enumerate()
            .find(|(_, amount)| **amount < 0)
        {
            return Err(ReservationError::Creation(format!(
                "price for night {} is negative ({})",
                night + 1,
                amount
            )));
        }

        stay_end(self.start_date, self.night_count).ok_or_else(|| {
            ReservationError::Creation(format!(
                "stay of {} nights from {} ends outside the supported calendar",
                self.night_count, self.start_date
            ))
        })
    }

    /// State a freshly booked reservation starts in.
    ///
    /// A booking for the current business date has already passed its `Pending → Arriving`
    /// edge, so it starts as `Arriving`.
    pub fn initial_state(&self, today: NaiveDate) -> ReservationState {
        if self.start_date == today {
            ReservationState::Arriving
        } else {
            ReservationState::Pending
        }
    }
}

/// Parameters for editing a reservation's contact details.
///
/// Only provided fields are updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateContactParam {
    pub id: i32,
    pub email: Option<String>,
    pub phone: Option<String>,
}
