use crate::{
    data::{room::RoomRepository, room_type::RoomTypeRepository},
    error::AppError,
    model::room::{CreateRoomParam, CreateRoomTypeParam, HousekeepingState},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_by_occupant;
mod write_occupation;
