use super::*;

/// Tests registering a room type and a room of that type.
///
/// Expected: Ok with a free room at version 0
#[tokio::test]
async fn creates_free_room_of_new_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = RoomTypeRepository::new(db)
        .create(CreateRoomTypeParam {
            code: "DBL".to_string(),
            description: "Double room".to_string(),
        })
        .await?;

    let room = RoomRepository::new(db)
        .create(CreateRoomParam {
            type_id: room_type.id,
            housekeeping_state: HousekeepingState::Inspected,
        })
        .await?;

    assert_eq!(room.type_id, room_type.id);
    assert_eq!(room.housekeeping_state, HousekeepingState::Inspected);
    assert!(!room.occupied);
    assert_eq!(room.reservation_id, None);
    assert_eq!(room.version, 0);

    let stored_type = RoomTypeRepository::new(db).get_by_id(room_type.id).await?;
    assert_eq!(stored_type, Some(room_type));

    Ok(())
}

/// Tests that room type codes are unique.
///
/// Expected: Err on the duplicate code
#[tokio::test]
async fn rejects_duplicate_room_type_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::RoomTypeFactory::new(db)
        .code("STE")
        .build()
        .await?;

    let result = RoomTypeRepository::new(db)
        .create(CreateRoomTypeParam {
            code: "STE".to_string(),
            description: "Another suite".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn counts_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_rooms(db, 4).await?;

    assert_eq!(RoomRepository::new(db).count().await?, 4);

    Ok(())
}
