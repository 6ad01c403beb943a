mod reservation;
mod room;
mod room_allocation;
mod system_clock;
