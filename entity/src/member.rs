use sea_orm::entity::prelude::*;

/// Discord user known to the bot.
///
/// `first_inviter_id` is set once when the member first joins, while
/// `current_inviter_id` follows the invite used for the latest join.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_inviter_id: Option<String>,
    pub current_inviter_id: Option<String>,
    pub wallet_balance: i64,
    pub joined_at: Option<DateTimeUtc>,
    pub rejoined_at: Option<DateTimeUtc>,
    pub voice_bypass_until: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::FirstInviterId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    FirstInviter,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::CurrentInviterId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CurrentInviter,
    #[sea_orm(has_many = "super::member_role::Entity")]
    MemberRole,
    #[sea_orm(has_many = "super::channel_permission::Entity")]
    ChannelPermission,
    #[sea_orm(has_many = "super::activity::Entity")]
    Activity,
    #[sea_orm(has_many = "super::handled_payment::Entity")]
    HandledPayment,
}

impl Related<super::member_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberRole.def()
    }
}

impl Related<super::channel_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChannelPermission.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl Related<super::handled_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HandledPayment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
