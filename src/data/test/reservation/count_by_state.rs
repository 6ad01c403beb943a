use super::*;

#[tokio::test]
async fn counts_only_matching_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for state in ["active", "active", "departing", "passed"] {
        factory::reservation::ReservationFactory::new(db, date(2026, 3, 1))
            .state(state)
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);

    assert_eq!(repo.count_by_state(ReservationState::Active).await?, 2);
    assert_eq!(repo.count_by_state(ReservationState::Departing).await?, 1);
    assert_eq!(repo.count_by_state(ReservationState::Arriving).await?, 0);

    Ok(())
}
