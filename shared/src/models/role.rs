//! Role vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role
///
/// `Owner` is the only role that can hold barbershops directly; the staff
/// roles (`CoOwner`, `Admin`, `Capster`) reach a shop through their staff
/// link. `Customer` books appointments and sees nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Owner,
    CoOwner,
    Admin,
    Capster,
    Customer,
}

impl Role {
    /// Roles that reach a shop through a staff link
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::CoOwner | Role::Admin | Role::Capster)
    }

    /// Wire representation, matching the serde rename
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::CoOwner => "co-owner",
            Role::Admin => "admin",
            Role::Capster => "capster",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "co-owner" => Ok(Role::CoOwner),
            "admin" => Ok(Role::Admin),
            "capster" => Ok(Role::Capster),
            "customer" => Ok(Role::Customer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [
            Role::Owner,
            Role::CoOwner,
            Role::Admin,
            Role::Capster,
            Role::Customer,
        ] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn co_owner_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&Role::CoOwner).unwrap();
        assert_eq!(json, "\"co-owner\"");
    }

    #[test]
    fn staff_classification() {
        assert!(Role::Capster.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(Role::CoOwner.is_staff());
        assert!(!Role::Owner.is_staff());
        assert!(!Role::Customer.is_staff());
    }
}
