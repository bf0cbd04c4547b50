//! Role assignment domain models.

use chrono::{DateTime, Duration, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A role held by a member, optionally until an expiration date.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRole {
    pub member_id: u64,
    pub role_id: u64,
    /// `None` never expires.
    pub expiration_date: Option<DateTime<Utc>>,
}

impl MemberRole {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::member_role::Model) -> Result<Self, AppError> {
        Ok(Self {
            member_id: parse_u64_from_string(entity.member_id)?,
            role_id: parse_u64_from_string(entity.role_id)?,
            expiration_date: entity.expiration_date,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|expires| expires <= now)
    }

    /// Time left until expiration, zero once expired, `None` for permanent roles.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.expiration_date
            .map(|expires| (expires - now).max(Duration::zero()))
    }
}

/// A member role joined with its role definition.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedRole {
    pub role: crate::model::role::Role,
    pub expiration_date: Option<DateTime<Utc>>,
}
