//! Room fixtures for creating in-memory test data.

use entity::room;

/// Default housekeeping state of fixture rooms.
pub const DEFAULT_HOUSEKEEPING_STATE: &str = "clean";

/// Default room type ID for fixture rooms.
pub const DEFAULT_TYPE_ID: i32 = 1;

/// Creates a free, clean room entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - type_id: `1`
/// - housekeeping_state: `"clean"`
/// - occupied: `false`, reservation_id: `None`
/// - version: `0`
pub fn entity() -> room::Model {
    entity_builder().build()
}

/// Creates a room entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let room = fixture::room::entity_builder()
///     .housekeeping_state("out_of_order")
///     .build();
/// ```
pub fn entity_builder() -> RoomEntityBuilder {
    RoomEntityBuilder::default()
}

/// Builder for creating customized room entity models.
pub struct RoomEntityBuilder {
    id: i32,
    type_id: i32,
    housekeeping_state: String,
    reservation_id: Option<i32>,
    version: i32,
}

impl Default for RoomEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            type_id: DEFAULT_TYPE_ID,
            housekeeping_state: DEFAULT_HOUSEKEEPING_STATE.to_string(),
            reservation_id: None,
            version: 0,
        }
    }
}

impl RoomEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn type_id(mut self, type_id: i32) -> Self {
        self.type_id = type_id;
        self
    }

    /// Sets the raw stored housekeeping state.
    pub fn housekeeping_state(mut self, housekeeping_state: impl Into<String>) -> Self {
        self.housekeeping_state = housekeeping_state.into();
        self
    }

    /// Binds the room to a reservation and marks it occupied.
    pub fn occupied_by(mut self, reservation_id: i32) -> Self {
        self.reservation_id = Some(reservation_id);
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn build(self) -> room::Model {
        room::Model {
            id: self.id,
            type_id: self.type_id,
            housekeeping_state: self.housekeeping_state,
            occupied: self.reservation_id.is_some(),
            reservation_id: self.reservation_id,
            version: self.version,
        }
    }
}
