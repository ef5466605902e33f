use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role identifier used for RBAC.
///
/// ToolLink roles form a closed set assigned at authentication time; this
/// core never derives or mutates them. Role names arriving from the backend
/// are plain strings — parse them with [`Role::parse`] and treat `None` as
/// "no permissions" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
    Warehouse,
    Customer,
    Editor,
}

impl Role {
    /// Every defined role, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Cashier,
        Role::Warehouse,
        Role::Customer,
        Role::Editor,
    ];

    /// Parse a backend role string. Unknown names yield `None` (fail-closed
    /// at the caller, never a panic).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Role::Admin),
            "cashier" => Some(Role::Cashier),
            "warehouse" => Some(Role::Warehouse),
            "customer" => Some(Role::Customer),
            "editor" => Some(Role::Editor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cashier => "cashier",
            Role::Warehouse => "warehouse",
            Role::Customer => "customer",
            Role::Editor => "editor",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: '{0}'")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| RoleParseError(s.to_string()))
    }
}
