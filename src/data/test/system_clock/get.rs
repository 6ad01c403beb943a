use super::*;

/// Tests reading the clock before it was ever seeded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_uninitialized() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SystemClockRepository::new(db).get().await?;

    assert_eq!(result, None);

    Ok(())
}

#[tokio::test]
async fn returns_stored_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clock(db, date(2026, 2, 28)).await?;

    let result = SystemClockRepository::new(db).get().await?;

    assert_eq!(result, Some(date(2026, 2, 28)));

    Ok(())
}
