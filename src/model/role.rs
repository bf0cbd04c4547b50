//! Managed role domain models.

use std::fmt;
use std::str::FromStr;

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Purpose of a role the bot manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleType {
    Premium,
    Mute,
    Gender,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Mute => "mute",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "premium" => Ok(Self::Premium),
            "mute" => Ok(Self::Mute),
            "gender" => Ok(Self::Gender),
            other => Err(InternalError::UnknownStoredValue {
                kind: "role type",
                value: other.to_string(),
            }),
        }
    }
}

/// Discord role the bot manages.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    /// Discord role ID.
    pub id: u64,
    pub name: String,
    pub role_type: RoleType,
}

impl Role {
    /// Converts an entity model to a role domain model at the repository boundary.
    pub fn from_entity(entity: entity::role::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(entity.id)?,
            name: entity.name,
            role_type: entity.role_type.parse()?,
        })
    }
}
