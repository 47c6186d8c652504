//! The authenticated session and its durable store.
//!
//! A [`Session`] is the tuple of bearer credential, optional refresh
//! credential, and the identity snapshot returned at login. It is held in a
//! [`SessionStore`] so it survives process restarts, and is read by every
//! authenticated request at the moment the request is dispatched.

mod credentials;
mod store;
mod tokens;

pub use credentials::Credentials;
pub use store::{MemoryStore, SessionStore};
pub use tokens::{AccessToken, RefreshToken};

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// The authenticated user's profile snapshot as last known to the client.
///
/// May be stale relative to the backend; it is replaced wholesale at login
/// and never mutated piecemeal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id.
    pub id: u64,
    /// Normalized role; derived from the login response, never inferred
    /// client-side.
    pub role: Role,
    /// Display name as shown in the UI.
    pub display_name: String,
}

/// An authenticated session.
///
/// The access token and the identity are set and cleared together: there is
/// no constructor for a partial session, and stores treat a partially
/// persisted one as absent.
#[derive(Clone)]
pub struct Session {
    access: AccessToken,
    refresh: Option<RefreshToken>,
    identity: Identity,
}

impl Session {
    /// Create a session from a login or registration response.
    pub fn new(access: AccessToken, refresh: Option<RefreshToken>, identity: Identity) -> Self {
        Self {
            access,
            refresh,
            identity,
        }
    }

    /// Returns the bearer credential for request authorization.
    pub fn access_token(&self) -> &AccessToken {
        &self.access
    }

    /// Returns the refresh credential, if the backend issued one.
    pub fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh.as_ref()
    }

    /// Returns the identity snapshot.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns a copy of this session with the access token replaced.
    ///
    /// This is the refresh-success mutation: the refresh token and the
    /// identity are carried over untouched.
    pub fn with_access(&self, access: AccessToken) -> Self {
        Self {
            access,
            refresh: self.refresh.clone(),
            identity: self.identity.clone(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: 7,
            role: Role::Client,
            display_name: "Amina W.".to_string(),
        }
    }

    #[test]
    fn with_access_replaces_only_the_credential() {
        let session = Session::new(
            AccessToken::new("T1"),
            Some(RefreshToken::new("R1")),
            identity(),
        );

        let rotated = session.with_access(AccessToken::new("T2"));

        assert_eq!(rotated.access_token().as_str(), "T2");
        assert_eq!(rotated.refresh_token().unwrap().as_str(), "R1");
        assert_eq!(rotated.identity(), session.identity());
    }

    #[test]
    fn debug_hides_tokens() {
        let session = Session::new(
            AccessToken::new("super-secret"),
            Some(RefreshToken::new("also-secret")),
            identity(),
        );
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("also-secret"));
        assert!(debug.contains("Amina"));
    }
}
