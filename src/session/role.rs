//! User roles.

use serde::{Deserialize, Serialize};

/// Role a user signs in as; selects the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Looks for guidance.
    Student,
    /// Gives guidance; registers with specializations.
    Counselor,
    /// Runs an institution's deployment.
    Admin,
}

impl Role {
    /// Every role.
    pub const ALL: [Role; 3] = [Self::Student, Self::Counselor, Self::Admin];

    /// String tag stored in the session flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Counselor => "counselor",
            Self::Admin => "admin",
        }
    }

    /// Path of the role's dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Student => "/dashboard/student",
            Self::Counselor => "/dashboard/counselor",
            Self::Admin => "/dashboard/admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "counselor" => Ok(Self::Counselor),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
