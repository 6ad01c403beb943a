use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::room::{CreateRoomTypeParam, RoomType};

pub struct RoomTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a room type.
    ///
    /// # Returns
    /// - `Ok(RoomType)` - The created room type
    /// - `Err(DbErr)` - Database error, including a duplicate `code`
    pub async fn create(&self, param: CreateRoomTypeParam) -> Result<RoomType, DbErr> {
        let room_type = entity::room_type::ActiveModel {
            code: ActiveValue::Set(param.code),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomType::from_entity(room_type))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<RoomType>, DbErr> {
        Ok(entity::prelude::RoomType::find_by_id(id)
            .one(self.db)
            .await?
            .map(RoomType::from_entity))
    }
}
