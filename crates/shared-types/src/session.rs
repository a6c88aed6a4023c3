use serde::{Deserialize, Serialize};

/// Storage key holding the persisted role tag.
pub const ROLE_KEY: &str = "userRole";
/// Storage key holding the persisted auth token.
pub const TOKEN_KEY: &str = "token";

/// The role a browser session is acting under.
///
/// Persisted as a short tag under [`ROLE_KEY`]; an absent or unknown tag is
/// `Anonymous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Anonymous,
    /// Chose the patient role but has not logged in.
    Patient,
    LoggedPatient,
    Doctor,
    Admin,
}

impl Role {
    /// Parse a persisted tag. Unknown values fall back to `Anonymous`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "patient" => Role::Patient,
            "loggedPatient" => Role::LoggedPatient,
            "doctor" => Role::Doctor,
            "admin" => Role::Admin,
            _ => Role::Anonymous,
        }
    }

    /// Tag written to storage. `None` means the key is removed.
    pub fn as_tag(&self) -> Option<&'static str> {
        match self {
            Role::Anonymous => None,
            Role::Patient => Some("patient"),
            Role::LoggedPatient => Some("loggedPatient"),
            Role::Doctor => Some("doctor"),
            Role::Admin => Some("admin"),
        }
    }

    /// Roles that only exist after a successful login and so need a token.
    pub fn requires_token(&self) -> bool {
        matches!(self, Role::LoggedPatient | Role::Doctor | Role::Admin)
    }
}

/// Snapshot of the persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub token: Option<String>,
}

impl Session {
    pub fn new(role: Role, token: Option<String>) -> Self {
        Self {
            role,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Build from raw storage values (either may be missing).
    pub fn from_storage(role: Option<&str>, token: Option<&str>) -> Self {
        Self::new(
            role.map(Role::from_tag).unwrap_or_default(),
            token.map(str::to_string),
        )
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// An authenticated role without a token is a stale login.
    pub fn is_expired(&self) -> bool {
        self.role.requires_token() && !self.has_token()
    }
}
