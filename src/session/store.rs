//! On-disk persistence of the session token.

use super::context::SessionContext;
use crate::error::{PantryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
}

/// A JSON file holding the last login's token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/pantry-tools/session.json`, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pantry-tools").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session, or `None` when nothing was saved.
    pub fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path).map_err(|e| PantryError::io(&self.path, e))?;
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|e| PantryError::session(format!("corrupt session file: {e}")))
    }

    pub fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PantryError::io(parent, e))?;
        }
        let data = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, data).map_err(|e| PantryError::io(&self.path, e))?;
        tracing::debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| PantryError::io(&self.path, e))?;
        }
        Ok(())
    }

    /// Restore a [`SessionContext`] from disk.
    ///
    /// A stored token that no longer decodes is removed, leaving an
    /// anonymous session.
    pub fn restore_context(&self) -> Result<SessionContext> {
        let Some(stored) = self.load()? else {
            return Ok(SessionContext::new());
        };
        let session = SessionContext::restore(&stored.token);
        if !session.is_authenticated() {
            self.clear()?;
        }
        Ok(session)
    }
}
