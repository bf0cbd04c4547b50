use super::*;
use crate::model::member::{JoinKind, RecordJoinParam};
use chrono::{Duration, Utc};

/// Tests recording a first join with a known inviter.
///
/// Expected: Ok(First) with both inviter columns and joined_at set
#[tokio::test]
async fn records_first_join() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inviter = factory::create_member(db).await?;
    let inviter_id: u64 = inviter.id.parse().unwrap();
    let now = Utc::now();

    let repo = MemberRepository::new(db);
    let (member, kind) = repo
        .record_join(RecordJoinParam {
            member_id: 555,
            inviter_id: Some(inviter_id),
            joined_at: now,
        })
        .await?;

    assert_eq!(kind, JoinKind::First);
    assert_eq!(member.first_inviter_id, Some(inviter_id));
    assert_eq!(member.current_inviter_id, Some(inviter_id));
    assert_eq!(member.joined_at, Some(now));
    assert!(member.rejoined_at.is_none());

    Ok(())
}

/// Tests that a rejoin keeps the first inviter and updates the current one.
///
/// Expected: Ok(Rejoin) with first_inviter_id preserved and rejoined_at set
#[tokio::test]
async fn rejoin_preserves_first_inviter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_inviter = factory::create_member(db).await?;
    let second_inviter = factory::create_member(db).await?;
    let member = factory::member::MemberFactory::new(db)
        .invited_by(first_inviter.id.clone())
        .build()
        .await?;

    let rejoined_at = Utc::now() + Duration::days(3);
    let repo = MemberRepository::new(db);
    let (updated, kind) = repo
        .record_join(RecordJoinParam {
            member_id: member.id.parse().unwrap(),
            inviter_id: Some(second_inviter.id.parse().unwrap()),
            joined_at: rejoined_at,
        })
        .await?;

    assert_eq!(kind, JoinKind::Rejoin);
    assert_eq!(
        updated.first_inviter_id,
        Some(first_inviter.id.parse().unwrap())
    );
    assert_eq!(
        updated.current_inviter_id,
        Some(second_inviter.id.parse().unwrap())
    );
    assert_eq!(updated.rejoined_at, Some(rejoined_at));
    assert_eq!(updated.joined_at, member.joined_at);

    Ok(())
}

/// Tests a rejoin where the invite could not be determined.
///
/// Expected: Ok(Rejoin) with the current inviter left as it was
#[tokio::test]
async fn rejoin_without_inviter_keeps_current() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inviter = factory::create_member(db).await?;
    let member = factory::member::MemberFactory::new(db)
        .invited_by(inviter.id.clone())
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let (updated, _) = repo
        .record_join(RecordJoinParam {
            member_id: member.id.parse().unwrap(),
            inviter_id: None,
            joined_at: Utc::now(),
        })
        .await?;

    assert_eq!(updated.current_inviter_id, Some(inviter.id.parse().unwrap()));

    Ok(())
}

/// Tests a first join for a member created earlier by a wallet command.
///
/// Expected: Ok(First) and the existing balance preserved
#[tokio::test]
async fn first_join_of_known_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.add_balance(4242, 30).await?;

    let (member, kind) = repo
        .record_join(RecordJoinParam {
            member_id: 4242,
            inviter_id: None,
            joined_at: Utc::now(),
        })
        .await?;

    assert_eq!(kind, JoinKind::First);
    assert_eq!(member.wallet_balance, 30);
    assert!(member.joined_at.is_some());

    Ok(())
}
