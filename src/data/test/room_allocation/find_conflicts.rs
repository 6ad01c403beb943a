use super::*;

/// Tests the half-open overlap check.
///
/// An allocation for 06-10..06-13 blocks any span sharing a night with it, but not a span
/// that starts on its end date or ends on its start date.
///
/// Expected: Ok with the overlapping allocation only where nights are shared
#[tokio::test]
async fn detects_shared_nights_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_room_type, room) = factory::helpers::create_room_with_type(db).await?;
    let holder = factory::create_reservation(db, date(2026, 6, 10), 3).await?;
    let other = factory::create_reservation(db, date(2026, 6, 1), 1).await?;

    let repo = RoomAllocationRepository::new(db);
    repo.create(room.id, holder.id, date(2026, 6, 10), date(2026, 6, 13))
        .await?;

    let overlapping = repo
        .find_conflicts(room.id, date(2026, 6, 12), date(2026, 6, 14), other.id)
        .await?;
    let after = repo
        .find_conflicts(room.id, date(2026, 6, 13), date(2026, 6, 15), other.id)
        .await?;
    let before = repo
        .find_conflicts(room.id, date(2026, 6, 8), date(2026, 6, 10), other.id)
        .await?;

    assert_eq!(overlapping.len(), 1);
    assert_eq!(overlapping[0].reservation_id, holder.id);
    assert!(after.is_empty());
    assert!(before.is_empty());

    Ok(())
}

/// Tests that the caller's own allocation and closed reservations never conflict.
///
/// Expected: Ok with no conflicts
#[tokio::test]
async fn ignores_own_and_closed_allocations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_room_type, room) = factory::helpers::create_room_with_type(db).await?;
    let own = factory::create_reservation(db, date(2026, 6, 10), 3).await?;
    let no_show = factory::reservation::ReservationFactory::new(db, date(2026, 6, 10))
        .night_count(3)
        .state("no_show")
        .build()
        .await?;

    let repo = RoomAllocationRepository::new(db);
    repo.create(room.id, own.id, date(2026, 6, 10), date(2026, 6, 13))
        .await?;
    repo.create(room.id, no_show.id, date(2026, 6, 10), date(2026, 6, 13))
        .await?;

    let conflicts = repo
        .find_conflicts(room.id, date(2026, 6, 10), date(2026, 6, 13), own.id)
        .await?;

    assert!(conflicts.is_empty());

    Ok(())
}
