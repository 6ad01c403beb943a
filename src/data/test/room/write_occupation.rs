use super::*;

/// Tests occupying a room against its current version.
///
/// Expected: Ok(true), room occupied and version bumped
#[tokio::test]
async fn writes_when_version_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_room_type, room) = factory::helpers::create_room_with_type(db).await?;

    let repo = RoomRepository::new(db);
    let written = repo.write_occupation(room.id, room.version, Some(5)).await?;

    assert!(written);
    let stored = repo.get_by_id(room.id).await?.unwrap();
    assert!(stored.occupied);
    assert_eq!(stored.reservation_id, Some(5));
    assert_eq!(stored.version, room.version + 1);

    Ok(())
}

/// Tests that a write against an outdated version loses.
///
/// Expected: Ok(false) and the first writer's occupant kept
#[tokio::test]
async fn skips_when_version_is_stale() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_room_type, room) = factory::helpers::create_room_with_type(db).await?;

    let repo = RoomRepository::new(db);
    assert!(repo.write_occupation(room.id, room.version, Some(5)).await?);
    let second = repo.write_occupation(room.id, room.version, None).await?;

    assert!(!second);
    assert_eq!(repo.get_by_id(room.id).await?.unwrap().reservation_id, Some(5));

    Ok(())
}

#[tokio::test]
async fn freeing_clears_occupied_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let room = factory::room::RoomFactory::new(db, room_type.id)
        .occupied_by(3)
        .version(7)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    assert!(repo.write_occupation(room.id, 7, None).await?);

    let stored = repo.get_by_id(room.id).await?.unwrap();
    assert!(!stored.occupied);
    assert_eq!(stored.reservation_id, None);
    assert_eq!(stored.version, 8);

    Ok(())
}
