use super::*;

#[tokio::test]
async fn writes_when_expected_date_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clock(db, date(2026, 2, 28)).await?;

    let repo = SystemClockRepository::new(db);
    let written = repo.compare_and_set(date(2026, 2, 28), date(2026, 3, 1)).await?;

    assert!(written);
    assert_eq!(repo.get().await?, Some(date(2026, 3, 1)));

    Ok(())
}

/// Tests the compare-and-set against a stale expected date.
///
/// Expected: Ok(false) and the stored date unchanged
#[tokio::test]
async fn skips_when_expected_date_is_stale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clock(db, date(2026, 3, 1)).await?;

    let repo = SystemClockRepository::new(db);
    let written = repo.compare_and_set(date(2026, 2, 28), date(2026, 3, 1)).await?;

    assert!(!written);
    assert_eq!(repo.get().await?, Some(date(2026, 3, 1)));

    Ok(())
}

#[tokio::test]
async fn skips_when_uninitialized() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let written = SystemClockRepository::new(db)
        .compare_and_set(date(2026, 2, 28), date(2026, 3, 1))
        .await?;

    assert!(!written);

    Ok(())
}
