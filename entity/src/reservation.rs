use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guest_id: i32,
    pub start_date: Date,
    /// `start_date + night_count`, stored for range queries.
    pub end_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub night_count: i32,
    pub room_id: Option<i32>,
    pub state: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Room,
    #[sea_orm(has_many = "super::reservation_price::Entity")]
    ReservationPrice,
    #[sea_orm(has_many = "super::reservation_extra::Entity")]
    ReservationExtra,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::reservation_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationPrice.def()
    }
}

impl Related<super::reservation_extra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationExtra.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
