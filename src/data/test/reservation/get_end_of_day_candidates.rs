use super::*;

/// Tests which reservations a run from 03-10 to 03-11 has to look at.
///
/// Open reservations touching either day are candidates, including departures that became
/// overdue on 03-10 and stays starting on 03-11. Terminal reservations and stays entirely
/// outside the two days are not.
///
/// Expected: Ok with exactly the open reservations in the window
#[tokio::test]
async fn selects_open_reservations_touching_either_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let arriving_tomorrow = factory::create_reservation(db, date(2026, 3, 11), 2).await?;
    let departing_today = factory::reservation::ReservationFactory::new(db, date(2026, 3, 8))
        .night_count(2)
        .state("departing")
        .build()
        .await?;
    let in_house = factory::reservation::ReservationFactory::new(db, date(2026, 3, 9))
        .night_count(4)
        .state("active")
        .build()
        .await?;

    // Ended before the window
    factory::reservation::ReservationFactory::new(db, date(2026, 3, 5))
        .night_count(2)
        .state("arriving")
        .build()
        .await?;
    // Starts after the window
    factory::create_reservation(db, date(2026, 3, 12), 1).await?;
    // Terminal inside the window
    factory::reservation::ReservationFactory::new(db, date(2026, 3, 10))
        .state("cancelled")
        .build()
        .await?;

    let result = ReservationRepository::new(db)
        .get_end_of_day_candidates(date(2026, 3, 10), date(2026, 3, 11))
        .await?;

    let ids: Vec<i32> = result.iter().map(|reservation| reservation.id).collect();
    assert_eq!(ids, vec![arriving_tomorrow.id, departing_today.id, in_house.id]);

    Ok(())
}

/// Tests that guests still in house are selected after their stay window has passed.
///
/// Active and departing reservations that ended days ago still hold a room and must be
/// checked out; a terminal reservation from the same dates is not selected.
///
/// Expected: Ok with both in-house reservations
#[tokio::test]
async fn selects_in_house_guests_past_their_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let overstaying = factory::reservation::ReservationFactory::new(db, date(2026, 3, 5))
        .night_count(0)
        .state("active")
        .build()
        .await?;
    let departing = factory::reservation::ReservationFactory::new(db, date(2026, 3, 5))
        .night_count(2)
        .state("departing")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, date(2026, 3, 5))
        .night_count(2)
        .state("passed")
        .build()
        .await?;

    let result = ReservationRepository::new(db)
        .get_end_of_day_candidates(date(2026, 3, 10), date(2026, 3, 11))
        .await?;

    let ids: Vec<i32> = result.iter().map(|reservation| reservation.id).collect();
    assert_eq!(ids, vec![overstaying.id, departing.id]);

    Ok(())
}
