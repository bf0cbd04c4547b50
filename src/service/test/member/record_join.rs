use super::*;

/// Tests a join through an inviter the bot has never seen.
///
/// Expected: inviter recorded and credited with the invite
#[tokio::test]
async fn creates_unknown_inviter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let (member, kind) = service
        .record_join(RecordJoinParam {
            member_id: 2,
            inviter_id: Some(1),
            joined_at: Utc::now(),
        })
        .await?;

    assert_eq!(kind, JoinKind::First);
    assert_eq!(member.first_inviter_id, Some(1));
    assert_eq!(service.invite_count(1).await?, 1);

    Ok(())
}

/// Tests a member joining through their own invite.
///
/// Expected: no inviter stored
#[tokio::test]
async fn ignores_self_invite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _) = MemberService::new(db)
        .record_join(RecordJoinParam {
            member_id: 3,
            inviter_id: Some(3),
            joined_at: Utc::now(),
        })
        .await?;

    assert!(member.first_inviter_id.is_none());

    Ok(())
}
