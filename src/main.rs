//! Matchday Desktop - Main Entry Point
//!
//! Desktop companion app for the Matchday web platform. Restores the
//! stored session and resolves the start view.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use matchday_lib::{
    commands,
    config::AppConfig,
    logging,
    notify::LogNotifier,
    router::Navigation,
    store::TokenStore,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    info!("Matchday Desktop starting...");

    let config = AppConfig::from_env();
    info!("API base URL: {}", config.api_base_url);

    let state = AppState::new(&config, TokenStore::new(), Arc::new(LogNotifier));

    if commands::restore_session(&state) {
        match state.api.fetch_profile(&state.session).await {
            Ok(profile) => info!(
                "Signed in as {}",
                profile.display_name.as_deref().unwrap_or(&profile.username)
            ),
            Err(e) => warn!("Could not fetch profile: {}", e),
        }
    } else {
        info!("No stored session, starting signed out");
    }

    match commands::navigate(&state, "/") {
        Navigation::Allow { route, .. } => info!("Start view: {}", route.name),
        Navigation::Redirect { to } => info!("Start view redirected to {}", to),
        Navigation::NotFound => warn!("Start view not found"),
    }

    Ok(())
}
