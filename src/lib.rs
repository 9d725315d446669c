//! Matchday Desktop Library
//!
//! Core modules for the desktop companion app.

pub mod api;
pub mod commands;
pub mod config;
pub mod logging;
pub mod notify;
pub mod router;
pub mod session;
pub mod store;

use std::sync::Arc;

use api::ApiClient;
use config::AppConfig;
use notify::Notify;
use router::Router;
use session::SessionHandle;
use store::TokenStore;

/// Application state shared across commands
pub struct AppState {
    pub session: SessionHandle,
    pub store: TokenStore,
    pub api: ApiClient,
    pub router: Router,
}

impl AppState {
    /// Wire up the app against a config, store and notification sink
    pub fn new(config: &AppConfig, store: TokenStore, notifier: Arc<dyn Notify>) -> Self {
        Self {
            session: SessionHandle::new(),
            store,
            api: ApiClient::new(config),
            router: Router::new(notifier),
        }
    }
}
