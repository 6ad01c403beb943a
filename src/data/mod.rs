//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each domain
//! in the application. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from business logic. Every repository is generic
//! over `ConnectionTrait`, so the same code runs against the connection pool or inside a
//! `DatabaseTransaction` when a service needs several writes to commit together.

pub mod reservation;
pub mod room;
pub mod room_allocation;
pub mod room_type;
pub mod system_clock;

#[cfg(test)]
mod test;
