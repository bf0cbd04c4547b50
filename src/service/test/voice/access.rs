use super::*;

/// Tests that voice commands need premium or a bypass.
///
/// Expected: Err(PremiumRequired) without either, Ok after a bypass is granted
#[tokio::test]
async fn requires_premium_or_bypass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();
    let now = Utc::now();

    let service = VoiceService::new(db);

    assert!(matches!(
        service.access(member_id, now).await,
        Err(AppError::VoiceErr(VoiceError::PremiumRequired))
    ));

    service
        .grant_bypass(member_id, Duration::hours(1), now)
        .await?;
    let access = service.access(member_id, now).await?;

    assert!(access.tier.is_none());
    assert_eq!(access.max_mods(), 0);

    Ok(())
}

/// Tests that granting a bypass extends an active one.
///
/// Expected: expiration pushed past the first grant
#[tokio::test]
async fn extends_active_bypass() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let member = factory::member::MemberFactory::new(db)
        .voice_bypass_until(Some(now + Duration::hours(2)))
        .build()
        .await?;

    let service = VoiceService::new(db);
    let updated = service
        .grant_bypass(member.id.parse().unwrap(), Duration::hours(3), now)
        .await?;

    assert_eq!(updated.voice_bypass_until, Some(now + Duration::hours(5)));

    Ok(())
}

/// Tests that premium holders get their tier's moderator allowance.
///
/// Expected: Ok with the zG500 allowance of 3
#[tokio::test]
async fn premium_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, _) = factory::helpers::create_member_with_premium(db, "zG500", 5).await?;

    let access = VoiceService::new(db)
        .access(member.id.parse().unwrap(), Utc::now())
        .await?;

    assert_eq!(access.max_mods(), 3);

    Ok(())
}

/// Tests a bypass whose expiration would overflow the calendar.
///
/// Expected: Err(InvalidDuration) and the stored bypass left unchanged
#[tokio::test]
async fn rejects_bypass_past_calendar_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let member_id: u64 = member.id.parse().unwrap();
    let near_end = DateTime::<Utc>::MAX_UTC - Duration::days(1);

    let result = VoiceService::new(db)
        .grant_bypass(member_id, Duration::days(2), near_end)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ModerationErr(ModerationError::InvalidDuration(_)))
    ));
    assert!(VoiceService::new(db)
        .access(member_id, Utc::now())
        .await
        .is_err());

    Ok(())
}
