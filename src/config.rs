use crate::{
    error::{config::ConfigError, AppError},
    service::end_of_day::DEFAULT_CONCURRENCY,
};

/// Run the end of day at 03:00 every night (sec min hour day month weekday).
const DEFAULT_END_OF_DAY_SCHEDULE: &str = "0 0 3 * * *";

pub struct Config {
    pub database_url: String,

    /// Cron expression for the end-of-day trigger.
    pub end_of_day_schedule: String,
    /// Reservations processed concurrently per end-of-day run.
    pub end_of_day_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let end_of_day_schedule = lookup("END_OF_DAY_SCHEDULE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_END_OF_DAY_SCHEDULE.to_string());

        let end_of_day_concurrency = match lookup("END_OF_DAY_CONCURRENCY") {
            Some(value) => parse_concurrency(&value)?,
            None => DEFAULT_CONCURRENCY,
        };

        Ok(Self {
            database_url,
            end_of_day_schedule,
            end_of_day_concurrency,
        })
    }
}

fn parse_concurrency(value: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "END_OF_DAY_CONCURRENCY".to_string(),
        value: value.to_string(),
        reason,
    };

    match value.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(concurrency) => Ok(concurrency),
        Err(e) => Err(invalid(e.to_string())),
    }
}
