use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Portal role, as carried in the user record and role allow-lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Staff,
    Admin,
    Manager,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Patient,
        Role::Doctor,
        Role::Staff,
        Role::Admin,
        Role::Manager,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Patient => "patient",
            Doctor => "doctor",
            Staff => "staff",
            Admin => "admin",
            Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A role code that is not part of the portal's vocabulary.
#[derive(Debug, Clone, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        use Role::*;
        match code {
            "patient" => Ok(Patient),
            "doctor" => Ok(Doctor),
            "staff" => Ok(Staff),
            "admin" => Ok(Admin),
            "manager" => Ok(Manager),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Patient.to_string(), "patient");
        assert_eq!(Role::Doctor.to_string(), "doctor");
        assert_eq!(Role::Staff.to_string(), "staff");
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Manager.to_string(), "manager");
    }

    #[test]
    fn test_role_parse() {
        for role in Role::ALL {
            assert_eq!(role.code().parse::<Role>().unwrap(), role);
        }
        assert!("nurse".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"manager\"").unwrap(),
            Role::Manager
        );
    }
}
