//! User account payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Identity;
use crate::types::Role;

/// A user account as returned by the backend.
///
/// The backend has shipped two shapes for the role: a single `role` string
/// and a pair of `is_client`/`is_contractor` booleans. Both are carried
/// here and collapsed by [`User::role`]; nothing downstream should touch
/// the raw flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_client: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_contractor: Option<bool>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// The normalized role for this account.
    ///
    /// An explicit `role` field wins over the legacy flags; when only the
    /// flags are present, the contractor flag wins over the client flag,
    /// and an account with neither is treated as an administrator.
    pub fn role(&self) -> Role {
        if let Some(role) = self.role {
            return role;
        }
        if self.is_contractor.unwrap_or(false) {
            Role::Contractor
        } else if self.is_client.unwrap_or(false) {
            Role::Client
        } else {
            Role::Admin
        }
    }

    /// The identity snapshot stored in the session.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            role: self.role(),
            display_name: self.full_name.clone(),
        }
    }
}
