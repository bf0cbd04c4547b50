use super::*;

/// Tests a timed mute followed by an unmute.
///
/// Expected: mute listed with its expiration, then removed
#[tokio::test]
async fn mutes_and_unmutes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::role::create_typed_role(db, "mute-text", "mute").await?;
    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();
    let now = Utc::now();

    let service = ModerationService::new(db);
    let outcome = service
        .mute(member_id, MuteKind::Text, Some(Duration::hours(2)), now)
        .await?;

    assert_eq!(outcome.role_id, role.id.parse::<u64>().unwrap());
    assert_eq!(outcome.expiration_date, Some(now + Duration::hours(2)));
    assert_eq!(service.mutes(member_id, now).await?.len(), 1);

    let removed = service.unmute(member_id, MuteKind::Text).await?;

    assert_eq!(removed, outcome.role_id);
    assert!(service.mutes(member_id, now).await?.is_empty());

    Ok(())
}

/// Tests a permanent mute.
///
/// Expected: Ok with no expiration
#[tokio::test]
async fn mutes_permanently() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::create_typed_role(db, "mute-nick", "mute").await?;

    let outcome = ModerationService::new(db)
        .mute(555, MuteKind::Nick, None, Utc::now())
        .await?;

    assert!(outcome.expiration_date.is_none());

    Ok(())
}

/// Tests unmuting a member who is not muted and muting without the role.
///
/// Expected: Err(NotAssigned) and Err(RoleNotConfigured)
#[tokio::test]
async fn reports_missing_mute_and_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::create_typed_role(db, "mute-image", "mute").await?;
    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();

    let service = ModerationService::new(db);

    assert!(matches!(
        service.unmute(member_id, MuteKind::Image).await,
        Err(AppError::ModerationErr(ModerationError::NotAssigned(_)))
    ));
    assert!(matches!(
        service
            .mute(member_id, MuteKind::Live, None, Utc::now())
            .await,
        Err(AppError::ModerationErr(ModerationError::RoleNotConfigured(_)))
    ));

    Ok(())
}

/// Tests a mute whose expiration would overflow the calendar.
///
/// Expected: Err(InvalidDuration) and no mute stored
#[tokio::test]
async fn rejects_expiration_past_calendar_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::create_typed_role(db, "mute-live", "mute").await?;
    let near_end = DateTime::<Utc>::MAX_UTC - Duration::days(1);

    let service = ModerationService::new(db);
    let result = service
        .mute(777, MuteKind::Live, Some(Duration::days(2)), near_end)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ModerationErr(ModerationError::InvalidDuration(_)))
    ));
    assert!(service.mutes(777, Utc::now()).await?.is_empty());

    Ok(())
}

/// Tests reverting a first mute.
///
/// Expected: the stored mute is gone
#[tokio::test]
async fn revert_removes_new_mute() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::create_typed_role(db, "mute-text", "mute").await?;
    let now = Utc::now();

    let service = ModerationService::new(db);
    let outcome = service
        .mute(888, MuteKind::Text, Some(Duration::hours(1)), now)
        .await?;
    assert!(outcome.replaced.is_none());

    service.revert_mute(888, &outcome).await?;

    assert!(service.mutes(888, now).await?.is_empty());

    Ok(())
}

/// Tests reverting a mute that replaced an earlier one.
///
/// Expected: the earlier expiration is stored again
#[tokio::test]
async fn revert_restores_replaced_mute() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::create_typed_role(db, "mute-image", "mute").await?;
    let now = DateTime::parse_from_rfc3339("2030-01-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let first_expiration = now + Duration::hours(2);

    let service = ModerationService::new(db);
    service
        .mute(999, MuteKind::Image, Some(Duration::hours(2)), now)
        .await?;
    let outcome = service
        .mute(999, MuteKind::Image, Some(Duration::days(7)), now)
        .await?;
    assert_eq!(
        outcome.replaced.as_ref().and_then(|previous| previous.expiration_date),
        Some(first_expiration)
    );

    service.revert_mute(999, &outcome).await?;

    assert_eq!(
        service.mutes(999, now).await?,
        vec![(MuteKind::Image, Some(first_expiration))]
    );

    Ok(())
}
