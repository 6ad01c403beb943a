use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_room_type_table::RoomType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::TypeId))
                    .col(string(Room::HousekeepingState).default("clean"))
                    .col(boolean(Room::Occupied).default(false))
                    .col(integer_null(Room::ReservationId))
                    .col(integer(Room::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_type_id")
                            .from(Room::Table, Room::TypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    TypeId,
    HousekeepingState,
    Occupied,
    ReservationId,
    Version,
}
