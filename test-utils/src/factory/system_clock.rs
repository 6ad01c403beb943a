use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Seeds the business clock with `current_date`.
///
/// # Returns
/// - `Ok(entity::system_clock::Model)` - The clock row
/// - `Err(DbErr)` - Database error, including a clock that already exists
pub async fn create_clock(
    db: &DatabaseConnection,
    current_date: NaiveDate,
) -> Result<entity::system_clock::Model, DbErr> {
    entity::system_clock::ActiveModel {
        id: ActiveValue::Set(entity::system_clock::SINGLETON_ID),
        current_date: ActiveValue::Set(current_date),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
