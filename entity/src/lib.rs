//! SeaORM entity models for the hotel property-management schema.
//!
//! Each module mirrors one table created by the `migration` crate. Entity models stay inside
//! the data layer; repositories convert them into domain models before returning.

pub mod prelude;

pub mod reservation;
pub mod reservation_extra;
pub mod reservation_price;
pub mod room;
pub mod room_allocation;
pub mod room_type;
pub mod system_clock;
