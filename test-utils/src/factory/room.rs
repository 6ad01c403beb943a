//! Room factory for creating test room entities.
//!
//! Rooms are created free and clean by default. Use `occupied_by` or `set_occupant` to bind
//! a room to a reservation without going through the room registry.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db, room_type.id)
///     .housekeeping_state("dirty")
///     .occupied_by(reservation.id)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    type_id: i32,
    housekeeping_state: String,
    reservation_id: Option<i32>,
    version: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - housekeeping_state: `"clean"`
    /// - unoccupied
    /// - version: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `type_id` - Room type the room belongs to
    pub fn new(db: &'a DatabaseConnection, type_id: i32) -> Self {
        Self {
            db,
            type_id,
            housekeeping_state: "clean".to_string(),
            reservation_id: None,
            version: 0,
        }
    }

    /// Sets the stored housekeeping state. Any string is accepted so tests can store
    /// values the domain model rejects.
    pub fn housekeeping_state(mut self, housekeeping_state: impl Into<String>) -> Self {
        self.housekeeping_state = housekeeping_state.into();
        self
    }

    /// Marks the room occupied by `reservation_id`.
    pub fn occupied_by(mut self, reservation_id: i32) -> Self {
        self.reservation_id = Some(reservation_id);
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert, e.g. unknown room type
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            type_id: ActiveValue::Set(self.type_id),
            housekeeping_state: ActiveValue::Set(self.housekeeping_state),
            occupied: ActiveValue::Set(self.reservation_id.is_some()),
            reservation_id: ActiveValue::Set(self.reservation_id),
            version: ActiveValue::Set(self.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a free, clean room of the given type.
///
/// Shorthand for `RoomFactory::new(db, type_id).build().await`.
pub async fn create_room(
    db: &DatabaseConnection,
    type_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, type_id).build().await
}

/// Binds an existing room to `reservation_id`, or frees it with `None`.
///
/// Writes the row directly and leaves `version` unchanged, so it stands in for state set up
/// before the code under test ran.
///
/// # Returns
/// - `Ok(entity::room::Model)` - The updated room
/// - `Err(DbErr)` - Database error, including an unknown room
pub async fn set_occupant(
    db: &DatabaseConnection,
    room_id: i32,
    reservation_id: Option<i32>,
) -> Result<entity::room::Model, DbErr> {
    entity::room::ActiveModel {
        id: ActiveValue::Unchanged(room_id),
        occupied: ActiveValue::Set(reservation_id.is_some()),
        reservation_id: ActiveValue::Set(reservation_id),
        ..Default::default()
    }
    .update(db)
    .await
}
