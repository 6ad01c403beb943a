use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000003_create_room_table::Room,
    m20261001_000004_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAllocation::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomAllocation::Id))
                    .col(integer(RoomAllocation::RoomId))
                    .col(integer_uniq(RoomAllocation::ReservationId))
                    .col(date(RoomAllocation::StartDate))
                    .col(date(RoomAllocation::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_allocation_room_id")
                            .from(RoomAllocation::Table, RoomAllocation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_allocation_reservation_id")
                            .from(RoomAllocation::Table, RoomAllocation::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_allocation_room_window")
                    .table(RoomAllocation::Table)
                    .col(RoomAllocation::RoomId)
                    .col(RoomAllocation::StartDate)
                    .col(RoomAllocation::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAllocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomAllocation {
    Table,
    Id,
    RoomId,
    ReservationId,
    StartDate,
    EndDate,
}
