//! File-backed session store.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use fundi_core::error::Error;
use fundi_core::{AccessToken, Identity, RefreshToken, Result, Session, SessionStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data. All fields are written together so a reload never
/// sees a partial session.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: Option<String>,
    identity: Identity,
}

/// Session store persisting to a JSON file in the user's data directory.
///
/// A missing, unreadable, or unparsable file loads as "no session" —
/// the user just has to log in again.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the platform-default session path.
    pub fn default_location() -> AnyResult<Self> {
        let dirs =
            ProjectDirs::from("", "", "fundi").context("Could not determine config directory")?;

        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;

        Ok(Self::new(data_dir.join("session.json")))
    }
}

#[async_trait]
impl SessionStore for FileStore {
    async fn load(&self) -> Result<Option<Session>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::Storage(err)),
        };

        let stored: StoredSession = match serde_json::from_str(&json) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "ignoring unparsable session file");
                return Ok(None);
            }
        };

        Ok(Some(Session::new(
            AccessToken::new(stored.access_token),
            stored.refresh_token.map(RefreshToken::new),
            stored.identity,
        )))
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let stored = StoredSession {
            access_token: session.access_token().as_str().to_string(),
            refresh_token: session.refresh_token().map(|t| t.as_str().to_string()),
            identity: session.identity().clone(),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(|e| {
            Error::Storage(std::io::Error::other(e))
        })?;

        // Write-then-rename so a crash mid-write never leaves a torn file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(Error::Storage)?;

        // Restrictive permissions (Unix only), the file holds live tokens
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&tmp).map_err(Error::Storage)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&tmp, perms).map_err(Error::Storage)?;
        }

        fs::rename(&tmp, &self.path).map_err(Error::Storage)
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::Storage(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundi_core::Role;

    fn session() -> Session {
        Session::new(
            AccessToken::new("T1"),
            Some(RefreshToken::new("R1")),
            Identity {
                id: 7,
                role: Role::Client,
                display_name: "Amina W.".to_string(),
            },
        )
    }

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("session.json"))
    }

    #[tokio::test]
    async fn save_then_load_round_trips_on_a_fresh_instance() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).save(&session()).await.unwrap();

        // A fresh store instance must see exactly what was written.
        let loaded = store_in(&dir).load().await.unwrap().unwrap();
        assert_eq!(loaded.access_token().as_str(), "T1");
        assert_eq!(loaded.refresh_token().unwrap().as_str(), "R1");
        assert_eq!(loaded.identity().role, Role::Client);
    }

    #[tokio::test]
    async fn missing_file_loads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("session.json"), "{not json").unwrap();
        assert!(store_in(&dir).load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn partial_session_data_loads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        // Credential without identity is a partial session.
        fs::write(
            dir.path().join("session.json"),
            r#"{"access_token": "T1"}"#,
        )
        .unwrap();
        assert!(store_in(&dir).load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_the_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&session()).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        store.clear().await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn session_file_is_private() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&session()).await.unwrap();

        let mode = fs::metadata(dir.path().join("session.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
