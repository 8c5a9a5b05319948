// caja-client/src/session.rs
// Session storage - JSON file in the work directory

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::client::Usuario;

/// Session file name inside the work directory
pub const SESSION_FILE: &str = "session.json";

/// Persisted login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    /// Backend the token was issued by
    pub base_url: String,
    pub token: String,
    pub usuario: Option<Usuario>,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        usuario: Option<Usuario>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            usuario,
            saved_at: Utc::now(),
        }
    }

    /// Whether this session was issued by `base_url` (trailing `/` ignored)
    pub fn matches(&self, base_url: &str) -> bool {
        self.base_url.trim_end_matches('/') == base_url.trim_end_matches('/')
    }
}

/// Session storage
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Storage at `{work_dir}/session.json`
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: work_dir.into().join(SESSION_FILE),
        }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn save(&self, session: &StoredSession) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    /// Load the session; a missing or unreadable file is `None`
    pub fn load(&self) -> Option<StoredSession> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring corrupt session file"
                );
                None
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
