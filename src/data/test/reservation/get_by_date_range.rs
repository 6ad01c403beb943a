use super::*;

/// Tests the inclusive overlap between stays and the queried range.
///
/// Stays touching either boundary match, stays entirely before or after do not.
///
/// Expected: Ok with only overlapping reservations, ordered by start date
#[tokio::test]
async fn returns_stays_intersecting_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    // 06-01..06-03, ends on the first queried day
    let ends_on_from = factory::create_reservation(db, date(2026, 6, 1), 2).await?;
    // 06-05..06-06, inside
    let inside = factory::create_reservation(db, date(2026, 6, 5), 1).await?;
    // 06-07..06-09, starts on the last queried day
    let starts_on_to = factory::create_reservation(db, date(2026, 6, 7), 2).await?;
    // 05-25..05-28, before
    factory::create_reservation(db, date(2026, 5, 25), 3).await?;
    // 06-08.., after
    factory::create_reservation(db, date(2026, 6, 8), 1).await?;

    let result = ReservationRepository::new(db)
        .get_by_date_range(date(2026, 6, 3), date(2026, 6, 7))
        .await?;

    let ids: Vec<i32> = result.iter().map(|reservation| reservation.id).collect();
    assert_eq!(ids, vec![ends_on_from.id, inside.id, starts_on_to.id]);

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_quiet_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_reservation(db, date(2026, 6, 1), 2).await?;

    let result = ReservationRepository::new(db)
        .get_by_date_range(date(2026, 7, 1), date(2026, 7, 31))
        .await?;

    assert!(result.is_empty());

    Ok(())
}
