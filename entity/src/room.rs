use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub type_id: i32,
    pub housekeeping_state: String,
    pub occupied: bool,
    /// Reservation currently holding the room; set iff `occupied`.
    pub reservation_id: Option<i32>,
    /// Bumped on every occupancy write for optimistic concurrency.
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_type::Entity",
        from = "Column::TypeId",
        to = "super::room_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RoomType,
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
