pub use super::reservation::Entity as Reservation;
pub use super::reservation_extra::Entity as ReservationExtra;
pub use super::reservation_price::Entity as ReservationPrice;
pub use super::room::Entity as Room;
pub use super::room_allocation::Entity as RoomAllocation;
pub use super::room_type::Entity as RoomType;
pub use super::system_clock::Entity as SystemClock;
