mod activity;
mod economy;
mod gender;
mod member;
mod moderation;
mod premium;
mod role;
