//! Durable session storage.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::Result;

use super::Session;

/// Durable holder of the current [`Session`].
///
/// Implementations must persist the credential, refresh credential, and
/// identity together so a reload never observes a partially written
/// session; stored data that fails to parse is reported as absent, not as
/// an error. `clear` is idempotent.
///
/// Stores perform storage I/O only; they never make network calls. The
/// store is injected into the API client so tests can substitute an
/// in-memory double.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reconstruct the session from durable storage.
    async fn load(&self) -> Result<Option<Session>>;

    /// Persist all session fields atomically.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Remove the persisted session. Idempotent.
    async fn clear(&self) -> Result<()>;
}

/// In-process session store.
///
/// Used by tests and by embedders that manage persistence themselves.
#[derive(Default)]
pub struct MemoryStore {
    session: RwLock<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a session.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self) -> Result<Option<Session>> {
        Ok(self.session.read().expect("session lock poisoned").clone())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        *self.session.write().expect("session lock poisoned") = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.session.write().expect("session lock poisoned") = None;
        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let held = self
            .session
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false);
        f.debug_struct("MemoryStore").field("held", &held).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AccessToken, Identity, RefreshToken};
    use crate::types::Role;

    fn session() -> Session {
        Session::new(
            AccessToken::new("T1"),
            Some(RefreshToken::new("R1")),
            Identity {
                id: 1,
                role: Role::Contractor,
                display_name: "Juma K.".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn save_then_load_round_trips_all_fields() {
        let store = MemoryStore::new();
        store.save(&session()).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.access_token().as_str(), "T1");
        assert_eq!(loaded.refresh_token().unwrap().as_str(), "R1");
        assert_eq!(loaded.identity().role, Role::Contractor);
    }

    #[tokio::test]
    async fn clear_leaves_the_store_empty_and_is_idempotent() {
        let store = MemoryStore::with_session(session());
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fresh_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());
    }
}
