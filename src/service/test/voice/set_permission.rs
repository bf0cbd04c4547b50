use super::*;

/// Tests toggling a permission twice.
///
/// Expected: first allowed, then denied
#[tokio::test]
async fn toggles_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _) = factory::helpers::create_member_with_premium(db, "zG50", 5).await?;
    let owner_id: u64 = owner.id.parse().unwrap();
    let now = Utc::now();

    let service = VoiceService::new(db);
    let first = service
        .set_permission(
            param(owner_id, 77, VoicePermission::Speak, PermissionChange::Toggle),
            now,
        )
        .await?;
    assert_eq!(first.allow, Permissions::SPEAK);

    let second = service
        .set_permission(
            param(owner_id, 77, VoicePermission::Speak, PermissionChange::Toggle),
            now,
        )
        .await?;
    assert!(second.allow.is_empty());
    assert_eq!(second.deny, Permissions::SPEAK);

    Ok(())
}

/// Tests that the moderator allowance of the tier is enforced.
///
/// Expected: zG50 owner can appoint one moderator, the second fails
#[tokio::test]
async fn enforces_moderator_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _) = factory::helpers::create_member_with_premium(db, "zG50", 5).await?;
    let owner_id: u64 = owner.id.parse().unwrap();
    let now = Utc::now();

    let service = VoiceService::new(db);
    service
        .set_permission(
            param(owner_id, 1, VoicePermission::Mod, PermissionChange::Allow),
            now,
        )
        .await?;
    let result = service
        .set_permission(
            param(owner_id, 2, VoicePermission::Mod, PermissionChange::Allow),
            now,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::VoiceErr(VoiceError::ModLimitReached { limit: 1 }))
    ));
    assert_eq!(service.moderators(owner_id).await?, vec![1]);

    Ok(())
}

/// Tests that a moderator may change permissions but not appoint moderators.
///
/// Expected: Ok for speak, Err(OwnerOnly) for mod, Err(NotChannelOwner) for others
#[tokio::test]
async fn moderators_act_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _) = factory::helpers::create_member_with_premium(db, "zG100", 5).await?;
    let owner_id: u64 = owner.id.parse().unwrap();
    let now = Utc::now();

    let service = VoiceService::new(db);
    service
        .set_permission(
            param(owner_id, 10, VoicePermission::Mod, PermissionChange::Allow),
            now,
        )
        .await?;

    let by_mod = SetPermissionParam {
        actor_id: 10,
        ..param(owner_id, 20, VoicePermission::Speak, PermissionChange::Deny)
    };
    assert_eq!(
        service.set_permission(by_mod, now).await?.deny,
        Permissions::SPEAK
    );

    let mod_appoints = SetPermissionParam {
        actor_id: 10,
        ..param(owner_id, 30, VoicePermission::Mod, PermissionChange::Allow)
    };
    assert!(matches!(
        service.set_permission(mod_appoints, now).await,
        Err(AppError::VoiceErr(VoiceError::OwnerOnly))
    ));

    let stranger = SetPermissionParam {
        actor_id: 99,
        ..param(owner_id, 20, VoicePermission::Speak, PermissionChange::Allow)
    };
    assert!(matches!(
        service.set_permission(stranger, now).await,
        Err(AppError::VoiceErr(VoiceError::NotChannelOwner))
    ));

    Ok(())
}

/// Tests that an owner cannot target themselves.
///
/// Expected: Err(SelfTarget)
#[tokio::test]
async fn rejects_self_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _) = factory::helpers::create_member_with_premium(db, "zG50", 5).await?;
    let owner_id: u64 = owner.id.parse().unwrap();

    let result = VoiceService::new(db)
        .set_permission(
            param(owner_id, owner_id, VoicePermission::Speak, PermissionChange::Deny),
            Utc::now(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::VoiceErr(VoiceError::SelfTarget))
    ));

    Ok(())
}

/// Tests that clearing the only flag removes the stored overwrite.
///
/// Expected: overwrite kept after a deny, deleted after the flag is cleared
#[tokio::test]
async fn removes_empty_overwrite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _) = factory::helpers::create_member_with_premium(db, "zG100", 5).await?;
    let owner_id: u64 = owner.id.parse().unwrap();
    factory::create_channel_permission(db, &owner.id, "5", Permissions::STREAM.bits()).await?;
    let now = Utc::now();

    let service = VoiceService::new(db);
    let denied = service
        .set_permission(
            param(owner_id, 5, VoicePermission::Live, PermissionChange::Deny),
            now,
        )
        .await?;
    assert_eq!(denied.deny, Permissions::STREAM);
    assert_eq!(service.stored_overwrites(owner_id).await?.len(), 1);

    let cleared = service
        .set_permission(
            param(owner_id, 5, VoicePermission::Live, PermissionChange::Clear),
            now,
        )
        .await?;
    assert!(cleared.is_empty());
    assert!(service.stored_overwrites(owner_id).await?.is_empty());

    Ok(())
}

/// Tests resetting all stored overwrites of an owner.
///
/// Expected: Ok(2) and nothing stored afterwards
#[tokio::test]
async fn reset_clears_all_targets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    factory::create_channel_permission(db, &owner.id, "5", Permissions::SPEAK.bits()).await?;
    factory::create_channel_permission(db, &owner.id, "6", Permissions::SPEAK.bits()).await?;
    let owner_id: u64 = owner.id.parse().unwrap();

    let service = VoiceService::new(db);

    assert_eq!(service.reset(owner_id, None).await?, 2);
    assert!(service.stored_overwrites(owner_id).await?.is_empty());

    Ok(())
}
