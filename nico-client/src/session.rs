//! Session store - token, user id and role kept on disk
//!
//! The dashboard reads the bearer token and the acting user id from here on
//! every action. There is no refresh or rotation: an expired token only
//! shows up as a failed call.

use serde::{Deserialize, Serialize};
use shared::EntityId;
use shared::models::ADMIN_ROLE;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ClientError, ClientResult};

/// Persisted session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<EntityId>,
    pub user_role: Option<String>,
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Shared handle to the session; clones see the same state
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Session that lives only in memory (tests, one-shot commands)
    pub fn in_memory(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
            path: None,
        }
    }

    /// Load the session file; a missing file means signed out
    pub fn load(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();
        let session = if path.exists() {
            let json = fs::read_to_string(&path)?;
            match serde_json::from_str(&json) {
                Ok(session) => session,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Discarding unreadable session file: {e}");
                    Session::default()
                }
            }
        } else {
            Session::default()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(session)),
            path: Some(path),
        })
    }

    /// Backing file, if persisted
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn snapshot(&self) -> Session {
        self.inner.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    /// Acting user id, required by most write endpoints
    pub async fn user_id(&self) -> ClientResult<EntityId> {
        self.inner.read().await.user_id.ok_or(ClientError::NotSignedIn)
    }

    pub async fn is_admin(&self) -> bool {
        self.inner.read().await.is_admin()
    }

    /// Store a new session and write it through to disk
    pub async fn sign_in(
        &self,
        token: impl Into<String>,
        user_id: EntityId,
        user_role: Option<String>,
    ) -> ClientResult<()> {
        let session = Session {
            token: Some(token.into()),
            user_id: Some(user_id),
            user_role,
        };
        self.persist(&session)?;
        *self.inner.write().await = session;
        tracing::info!(user_id, "Session stored");
        Ok(())
    }

    /// Forget everything, including the file
    pub async fn clear(&self) -> ClientResult<()> {
        *self.inner.write().await = Session::default();
        if let Some(path) = &self.path
            && path.exists()
        {
            fs::remove_file(path)?;
        }
        tracing::info!("Session cleared");
        Ok(())
    }

    fn persist(&self, session: &Session) -> ClientResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }
}
