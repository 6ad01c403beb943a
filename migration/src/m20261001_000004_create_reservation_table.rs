use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000003_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::GuestId))
                    .col(date(Reservation::StartDate))
                    .col(date(Reservation::EndDate))
                    .col(time(Reservation::StartTime))
                    .col(time(Reservation::EndTime))
                    .col(integer(Reservation::NightCount))
                    .col(integer_null(Reservation::RoomId))
                    .col(string(Reservation::State))
                    .col(string(Reservation::Email))
                    .col(string(Reservation::Phone))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The end-of-day scan filters on state and the stay window
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_state_window")
                    .table(Reservation::Table)
                    .col(Reservation::State)
                    .col(Reservation::StartDate)
                    .col(Reservation::EndDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_guest_id")
                    .table(Reservation::Table)
                    .col(Reservation::GuestId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    GuestId,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    NightCount,
    RoomId,
    State,
    Email,
    Phone,
    CreatedAt,
    UpdatedAt,
}
