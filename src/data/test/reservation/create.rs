use super::*;

/// Tests creating a reservation with prices and extras.
///
/// Verifies that the nightly prices keep their order, extras come back sorted and the
/// stored row carries the derived end date and initial state.
///
/// Expected: Ok with reservation and child rows created
#[tokio::test]
async fn creates_reservation_with_prices_and_extras() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let created = repo
        .create(
            CreateReservationParam {
                guest_id: 7,
                start_date: date(2026, 4, 1),
                start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                night_count: 3,
                prices: vec![300, 100, 200],
                extra_ids: vec![12, 4],
                email: "seven@example.com".to_string(),
                phone: "+15550000007".to_string(),
            },
            date(2026, 4, 4),
            ReservationState::Pending,
        )
        .await?;

    assert_eq!(created.prices, vec![300, 100, 200]);
    assert_eq!(created.extra_ids, vec![4, 12]);
    assert_eq!(created.end_date, date(2026, 4, 4));
    assert_eq!(created.state, ReservationState::Pending);

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored, created);

    let price_rows = entity::prelude::ReservationPrice::find().all(db).await?;
    assert_eq!(price_rows.len(), 3);

    Ok(())
}

/// Tests creating a same-day stay with no nights.
///
/// Expected: Ok with no price rows
#[tokio::test]
async fn creates_same_day_stay_without_prices() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ReservationRepository::new(db)
        .create(
            CreateReservationParam {
                guest_id: 7,
                start_date: date(2026, 4, 1),
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                night_count: 0,
                prices: vec![],
                extra_ids: vec![],
                email: "day@example.com".to_string(),
                phone: "+15550000008".to_string(),
            },
            date(2026, 4, 1),
            ReservationState::Arriving,
        )
        .await?;

    assert!(created.prices.is_empty());
    assert_eq!(created.start_date, created.end_date);

    Ok(())
}
