use super::*;

#[tokio::test]
async fn deletes_existing_allocation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_room_type, room) = factory::helpers::create_room_with_type(db).await?;
    let reservation = factory::create_reservation(db, date(2026, 6, 10), 2).await?;

    let repo = RoomAllocationRepository::new(db);
    repo.create(room.id, reservation.id, date(2026, 6, 10), date(2026, 6, 12))
        .await?;

    assert!(repo.delete_by_reservation(reservation.id).await?);
    assert!(repo.get_by_reservation(reservation.id).await?.is_none());

    Ok(())
}

/// Tests deleting for a reservation that never held a room.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_allocation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db, date(2026, 6, 10), 2).await?;

    let deleted = RoomAllocationRepository::new(db)
        .delete_by_reservation(reservation.id)
        .await?;

    assert!(!deleted);

    Ok(())
}
