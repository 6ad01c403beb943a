//! Background jobs triggered on a cron schedule.

pub mod end_of_day;
