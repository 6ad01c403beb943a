use super::*;

/// Tests finding the rooms a reservation occupies.
///
/// Only the room bound to the reservation is returned; free rooms and rooms held by other
/// reservations are not.
///
/// Expected: Ok with the single occupied room
#[tokio::test]
async fn returns_rooms_held_by_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rooms = factory::helpers::create_rooms(db, 3).await?;
    factory::room::set_occupant(db, rooms[0].id, Some(7)).await?;
    factory::room::set_occupant(db, rooms[1].id, Some(8)).await?;

    let held = RoomRepository::new(db).get_by_occupant(7).await?;

    let ids: Vec<i32> = held.iter().map(|room| room.id).collect();
    assert_eq!(ids, vec![rooms[0].id]);

    Ok(())
}

/// Tests the lookup for a reservation that occupies nothing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_reservation_without_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_rooms(db, 2).await?;

    let held = RoomRepository::new(db).get_by_occupant(7).await?;

    assert!(held.is_empty());

    Ok(())
}
