use super::*;

/// Tests that the singleton key prevents a second clock row.
///
/// Expected: Err on the second insert, first date kept
#[tokio::test]
async fn rejects_second_clock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SystemClockRepository::new(db);
    repo.insert(date(2026, 2, 1)).await?;
    let second = repo.insert(date(2026, 3, 1)).await;

    assert!(second.is_err());
    assert_eq!(repo.get().await?, Some(date(2026, 2, 1)));

    Ok(())
}
