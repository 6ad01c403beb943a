//! Room type factory for creating test room type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test room types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let suite = RoomTypeFactory::new(&db)
///     .code("STE")
///     .description("Suite")
///     .build()
///     .await?;
/// ```
pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    description: String,
}

impl<'a> RoomTypeFactory<'a> {
    /// Creates a new RoomTypeFactory with default values.
    ///
    /// Defaults:
    /// - code: `"RT{id}"` where id is auto-incremented, keeping codes unique
    /// - description: `"Double room"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("RT{}", next_id()),
            description: "Double room".to_string(),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the room type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room_type::Model)` - Created room type entity
    /// - `Err(DbErr)` - Database error during insert, e.g. duplicate code
    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room type with default values.
///
/// Shorthand for `RoomTypeFactory::new(db).build().await`.
pub async fn create_room_type(db: &DatabaseConnection) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db).build().await
}
