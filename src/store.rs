//! Token Store Module
//!
//! Persists the session token, the single piece of client state that
//! survives restarts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

const TOKEN_FILE: &str = "token.json";

/// Persisted token record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    pub saved_at: chrono::DateTime<chrono::Utc>,
}

/// File-backed store for the session token
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    /// Create a store under the platform data directory
    pub fn new() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Matchday");
        Self::with_dir(dir)
    }

    /// Create a store rooted at an explicit directory
    pub fn with_dir(dir: PathBuf) -> Self {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            error!("Failed to create token store directory: {}", e);
        }
        debug!("Token store initialized at: {:?}", dir);
        Self { dir }
    }

    fn file_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    /// Persist the token
    pub fn save(&self, token: &str) -> Result<(), StoreError> {
        let record = StoredToken {
            token: token.to_string(),
            saved_at: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        std::fs::write(self.file_path(), json).map_err(|e| StoreError::Io(e.to_string()))?;

        info!("Saved session token");
        Ok(())
    }

    /// Load the stored token, `None` when absent or unreadable
    pub fn load(&self) -> Option<StoredToken> {
        let json = match std::fs::read_to_string(self.file_path()) {
            Ok(json) => json,
            Err(_) => {
                debug!("No stored token found");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Stored token is unreadable: {}", e);
                None
            }
        }
    }

    /// Delete the stored token if present
    pub fn delete(&self) -> Result<(), StoreError> {
        let path = self.file_path();

        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| StoreError::Io(e.to_string()))?;
            info!("Deleted stored token");
        }

        Ok(())
    }

    /// Check if a token is stored
    pub fn exists(&self) -> bool {
        self.file_path().exists()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::with_dir(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = temp_store();

        store.save("abc123").expect("save");

        let record = store.load().expect("stored token");
        assert_eq!(record.token, "abc123");
        assert!(store.exists());
    }

    #[test]
    fn load_without_stored_token_is_none() {
        let (_dir, store) = temp_store();

        assert!(store.load().is_none());
        assert!(!store.exists());
    }

    #[test]
    fn delete_removes_the_token() {
        let (_dir, store) = temp_store();
        store.save("abc123").expect("save");

        store.delete().expect("delete");

        assert!(!store.exists());
        assert!(store.load().is_none());

        // deleting again is fine
        store.delete().expect("delete twice");
    }

    #[test]
    fn unreadable_record_is_none() {
        let (_dir, store) = temp_store();
        std::fs::write(store.file_path(), "not json").expect("write");

        assert!(store.load().is_none());
    }
}
