use super::*;

#[tokio::test]
async fn writes_state_when_expected_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db, date(2026, 3, 11), 2).await?;

    let repo = ReservationRepository::new(db);
    let written = repo
        .update_state(
            reservation.id,
            ReservationState::Pending,
            ReservationState::Arriving,
        )
        .await?;

    assert!(written);
    assert_eq!(
        repo.get_by_id(reservation.id).await?.unwrap().state,
        ReservationState::Arriving
    );

    Ok(())
}

/// Tests the compare-and-set against a state that has since changed.
///
/// Expected: Ok(false) and the stored state untouched
#[tokio::test]
async fn skips_when_state_changed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::reservation::ReservationFactory::new(db, date(2026, 3, 11))
        .state("cancelled")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let written = repo
        .update_state(
            reservation.id,
            ReservationState::Pending,
            ReservationState::Arriving,
        )
        .await?;

    assert!(!written);
    assert_eq!(
        repo.get_by_id(reservation.id).await?.unwrap().state,
        ReservationState::Cancelled
    );

    Ok(())
}

#[tokio::test]
async fn skips_unknown_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let written = ReservationRepository::new(db)
        .update_state(999999, ReservationState::Pending, ReservationState::Arriving)
        .await?;

    assert!(!written);

    Ok(())
}
