//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the IDs of the rows they depend on, and the
//! `helpers` module creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     factory::create_clock(&db, today).await?;
//!     let (room_type, room) = factory::helpers::create_room_with_type(&db).await?;
//!     let reservation = factory::create_reservation(&db, today, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let reservation = factory::reservation::ReservationFactory::new(&db, today)
//!     .night_count(3)
//!     .state("active")
//!     .room_id(room.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `system_clock` - Seed the business date
//! - `room_type` - Create room type entities
//! - `room` - Create room entities and set their occupant
//! - `reservation` - Create reservations with their nightly prices
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod system_clock;

// Re-export commonly used factory functions for concise usage
pub use reservation::create_reservation;
pub use room::create_room;
pub use room_type::create_room_type;
pub use system_clock::create_clock;
