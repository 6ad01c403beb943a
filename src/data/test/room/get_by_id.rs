use super::*;

#[tokio::test]
async fn returns_none_for_unknown_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(RoomRepository::new(db).get_by_id(999999).await?.is_none());

    Ok(())
}

/// Tests reading a room whose stored housekeeping state is not a known value.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_for_corrupt_housekeeping_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let room = factory::room::RoomFactory::new(db, room_type.id)
        .housekeeping_state("sparkling")
        .build()
        .await?;

    let result = RoomRepository::new(db).get_by_id(room.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
