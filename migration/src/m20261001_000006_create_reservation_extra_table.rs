use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000004_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationExtra::Table)
                    .if_not_exists()
                    .col(integer(ReservationExtra::ReservationId))
                    .col(integer(ReservationExtra::ExtraId))
                    .primary_key(
                        Index::create()
                            .col(ReservationExtra::ReservationId)
                            .col(ReservationExtra::ExtraId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_extra_reservation_id")
                            .from(ReservationExtra::Table, ReservationExtra::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationExtra::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationExtra {
    Table,
    ReservationId,
    ExtraId,
}
