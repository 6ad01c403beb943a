//! Persistence for the single business-date row.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::system_clock::SINGLETON_ID;

pub struct SystemClockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SystemClockRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the stored business date.
    ///
    /// # Returns
    /// - `Ok(Some(date))` - The clock exists
    /// - `Ok(None)` - The clock has not been initialized
    /// - `Err(DbErr)` - Database error
    pub async fn get(&self) -> Result<Option<NaiveDate>, DbErr> {
        Ok(entity::prelude::SystemClock::find_by_id(SINGLETON_ID)
            .one(self.db)
            .await?
            .map(|clock| clock.current_date))
    }

    /// Inserts the clock row seeded with `date`.
    ///
    /// Fails with a unique-constraint `DbErr` if the row already exists.
    pub async fn insert(&self, date: NaiveDate) -> Result<NaiveDate, DbErr> {
        let clock = entity::system_clock::ActiveModel {
            id: ActiveValue::Set(SINGLETON_ID),
            current_date: ActiveValue::Set(date),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(clock.current_date)
    }

    /// Moves the clock from `expected` to `next` if it still reads `expected`.
    ///
    /// # Returns
    /// - `Ok(true)` - The clock now reads `next`
    /// - `Ok(false)` - The clock did not read `expected` (or does not exist); nothing written
    /// - `Err(DbErr)` - Database error
    pub async fn compare_and_set(&self, expected: NaiveDate, next: NaiveDate) -> Result<bool, DbErr> {
        let result = entity::prelude::SystemClock::update_many()
            .set(entity::system_clock::ActiveModel {
                current_date: ActiveValue::Set(next),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::system_clock::Column::Id.eq(SINGLETON_ID))
            .filter(entity::system_clock::Column::CurrentDate.eq(expected))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
