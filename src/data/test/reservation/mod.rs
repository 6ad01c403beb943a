use crate::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::reservation::{CreateReservationParam, ReservationState},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod count_by_state;
mod create;
mod get_by_date_range;
mod get_end_of_day_candidates;
mod update_state;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
