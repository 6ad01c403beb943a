use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Fixed primary key, the application only ever writes id = 1
        manager
            .create_table(
                Table::create()
                    .table(SystemClock::Table)
                    .if_not_exists()
                    .col(integer(SystemClock::Id).primary_key())
                    .col(date(SystemClock::CurrentDate))
                    .col(
                        timestamp(SystemClock::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemClock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SystemClock {
    Table,
    Id,
    CurrentDate,
    UpdatedAt,
}
