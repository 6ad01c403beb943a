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
                    .table(ReservationPrice::Table)
                    .if_not_exists()
                    .col(integer(ReservationPrice::ReservationId))
                    .col(integer(ReservationPrice::NightIndex))
                    .col(big_integer(ReservationPrice::Amount))
                    .primary_key(
                        Index::create()
                            .col(ReservationPrice::ReservationId)
                            .col(ReservationPrice::NightIndex),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_price_reservation_id")
                            .from(ReservationPrice::Table, ReservationPrice::ReservationId)
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
            .drop_table(Table::drop().table(ReservationPrice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationPrice {
    Table,
    ReservationId,
    NightIndex,
    Amount,
}
