//! Service layer for business logic and orchestration.
//!
//! Services sit between external callers (front-desk tooling, the cron trigger, dashboards)
//! and the data layer. They are responsible for:
//!
//! - **Business Logic**: Lifecycle rules, booking validation, occupancy invariants
//! - **Orchestration**: Coordinating several repositories, inside transactions where writes
//!   must commit together
//! - **Domain Models**: Working with domain models rather than entity models

pub mod clock;
pub mod end_of_day;
pub mod occupancy;
pub mod reservation;
pub mod room;
