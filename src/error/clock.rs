use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    /// No business date has been stored yet.
    ///
    /// The clock is seeded by `SystemClockService::initialize` at startup; every read
    /// and the end-of-day run abort before mutating anything when it is missing.
    #[error("System clock has not been initialized")]
    NotInitialized,

    /// The stored date moved away from the date the caller read.
    ///
    /// Raised when two end-of-day runs overlap: the second compare-and-set finds the
    /// clock already advanced and refuses to advance it again.
    #[error("System clock is no longer at {expected}; another run advanced it concurrently")]
    ConcurrentAdvance {
        /// Date the caller expected to advance from
        expected: NaiveDate,
    },

    /// Advancing would leave chrono's supported date range.
    #[error("Cannot advance business date past {0}")]
    DateOutOfRange(NaiveDate),
}
