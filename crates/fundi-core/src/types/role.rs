//! User role classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The capability a user holds on the marketplace.
///
/// The backend has shipped two shapes for this over time: a single `role`
/// string, and a pair of `is_client`/`is_contractor` booleans. Both are
/// normalized into this enum at the API boundary (see
/// [`User::role`](crate::models::User::role)); the flags never propagate
/// further into the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Posts service requests and funds the escrow wallet.
    Client,
    /// Accepts assignments and earns from completed work.
    Contractor,
    /// Platform administration; no dedicated surface in this client.
    Admin,
}

impl Role {
    pub fn is_client(self) -> bool {
        self == Role::Client
    }

    pub fn is_contractor(self) -> bool {
        self == Role::Contractor
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Client => "client",
            Role::Contractor => "contractor",
            Role::Admin => "admin",
        };
        write!(f, "{}", name)
    }
}
