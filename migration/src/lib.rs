pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_system_clock_table;
mod m20261001_000002_create_room_type_table;
mod m20261001_000003_create_room_table;
mod m20261001_000004_create_reservation_table;
mod m20261001_000005_create_reservation_price_table;
mod m20261001_000006_create_reservation_extra_table;
mod m20261002_000007_create_room_allocation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_system_clock_table::Migration),
            Box::new(m20261001_000002_create_room_type_table::Migration),
            Box::new(m20261001_000003_create_room_table::Migration),
            Box::new(m20261001_000004_create_reservation_table::Migration),
            Box::new(m20261001_000005_create_reservation_price_table::Migration),
            Box::new(m20261001_000006_create_reservation_extra_table::Migration),
            Box::new(m20261002_000007_create_room_allocation_table::Migration),
        ]
    }
}
