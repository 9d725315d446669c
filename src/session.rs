//! Session Module
//!
//! In-memory session state shared across the app for the lifetime of a run.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::info;

/// Session data for the current app instance
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Whether the stored token has been consulted yet.
    pub is_ready: bool,
    pub is_authed: bool,
    pub token: String,
    pub user_info: Option<Value>,
}

/// Shared handle to the session.
///
/// Cloned and passed explicitly to anything that reads or writes auth
/// state; `is_authenticated` is the single signal consulted by both the
/// navigation guard and the request layer.
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Arc<Mutex<SessionState>>,
}

impl SessionHandle {
    /// Create a fresh, signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_ready(&self) -> bool {
        self.lock().is_ready
    }

    /// Check if currently authenticated
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authed
    }

    /// Get the current session token, empty when signed out
    pub fn token(&self) -> String {
        self.lock().token.clone()
    }

    pub fn user_info(&self) -> Option<Value> {
        self.lock().user_info.clone()
    }

    /// Set the session token.
    ///
    /// `is_authed` follows the token: non-empty means signed in.
    pub fn set_token(&self, token: &str) {
        let mut state = self.lock();
        state.token = token.to_string();
        state.is_authed = !token.is_empty();
        if state.is_authed {
            info!("Session token set");
        }
    }

    pub fn set_user_info(&self, user_info: Value) {
        self.lock().user_info = Some(user_info);
    }

    /// Mark the session as resolved, signed in or not
    pub fn mark_ready(&self) {
        self.lock().is_ready = true;
    }

    /// Sign out.
    ///
    /// Resets everything except readiness: the session has been resolved,
    /// to nobody.
    pub fn clear(&self) {
        info!("Session cleared");
        let mut state = self.lock();
        state.is_authed = false;
        state.token = String::new();
        state.user_info = None;
    }

    /// Snapshot of the current state
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }
}
