pub use super::activity::Entity as Activity;
pub use super::channel_permission::Entity as ChannelPermission;
pub use super::handled_payment::Entity as HandledPayment;
pub use super::member::Entity as Member;
pub use super::member_role::Entity as MemberRole;
pub use super::role::Entity as Role;
