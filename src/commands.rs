//! App Commands Module
//!
//! Application-level operations gluing session, store, router and API.

use tracing::{debug, error, info};

use crate::api::{ApiError, LoginRequest, LoginResponse};
use crate::router::Navigation;
use crate::AppState;

/// Hydrate the session from the stored token, if any.
///
/// Marks the session ready either way and reports whether a sign-in was
/// restored.
pub fn restore_session(state: &AppState) -> bool {
    debug!("Restoring stored session");

    let restored = match state.store.load() {
        Some(stored) if !stored.token.is_empty() => {
            state.session.set_token(&stored.token);
            info!("Session restored (token saved at {})", stored.saved_at);
            true
        }
        Some(_) => {
            debug!("Stored token is empty, ignoring");
            false
        }
        None => false,
    };

    state.session.mark_ready();
    restored
}

/// Authenticate against the platform and persist the session token
pub async fn login(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let credentials = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = match state.api.login(&state.session, &credentials).await {
        Ok(response) => response,
        Err(e) => {
            error!("Login failed: {}", e);
            return Err(e);
        }
    };

    state.session.set_token(&response.token);
    state.session.set_user_info(response.user.clone());
    state.session.mark_ready();

    if let Err(e) = state.store.save(&response.token) {
        error!("Failed to persist token: {}", e);
    }

    Ok(response)
}

/// Drop the session locally
pub fn logout(state: &AppState) {
    info!("Logging out");

    state.session.clear();

    if let Err(e) = state.store.delete() {
        error!("Failed to delete stored token: {}", e);
    }
}

/// Guard-checked navigation
pub fn navigate(state: &AppState, to: &str) -> Navigation {
    state.router.resolve(&state.session, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::notify::LogNotifier;
    use crate::store::TokenStore;
    use serde_json::json;
    use std::net::TcpListener;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn state_for(base_url: &str, dir: &tempfile::TempDir) -> AppState {
        AppState::new(
            &AppConfig::with_base_url(base_url),
            TokenStore::with_dir(dir.path().to_path_buf()),
            Arc::new(LogNotifier),
        )
    }

    #[test]
    fn restore_without_stored_token_marks_ready() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = state_for("http://localhost:0", &dir);

        assert!(!restore_session(&state));
        assert!(state.session.is_ready());
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn restore_hydrates_session_from_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = state_for("http://localhost:0", &dir);
        state.store.save("abc123").expect("save");

        assert!(restore_session(&state));
        assert!(state.session.is_ready());
        assert!(state.session.is_authenticated());
        assert_eq!(state.session.token(), "abc123");
    }

    #[tokio::test]
    async fn login_sets_session_and_persists_token() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let state = state_for(&server.uri(), &dir);

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"username": "u", "password": "p"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "t-9",
                "user": {"id": "u-1"}
            })))
            .mount(&server)
            .await;

        let response = login(&state, "u", "p").await.expect("login");

        assert_eq!(response.token, "t-9");
        assert!(state.session.is_authenticated());
        assert_eq!(state.session.token(), "t-9");
        assert_eq!(state.session.user_info(), Some(json!({"id": "u-1"})));
        assert_eq!(
            state.store.load().map(|stored| stored.token),
            Some("t-9".to_string())
        );
    }

    #[tokio::test]
    async fn failed_login_leaves_session_untouched() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let state = state_for(&server.uri(), &dir);

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "bad credentials"})),
            )
            .mount(&server)
            .await;

        let result = login(&state, "u", "wrong").await;

        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, Some(json!({"error": "bad credentials"})));
            }
            other => panic!("expected status error, got {:?}", other.map(|_| ())),
        }
        assert!(!state.session.is_authenticated());
        assert!(!state.store.exists());
    }

    #[test]
    fn logout_clears_session_and_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = state_for("http://localhost:0", &dir);
        state.store.save("abc123").expect("save");
        state.session.set_token("abc123");

        logout(&state);

        assert!(!state.session.is_authenticated());
        assert_eq!(state.session.token(), "");
        assert!(!state.store.exists());
    }

    #[test]
    fn navigate_applies_the_guard() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = state_for("http://localhost:0", &dir);

        assert_eq!(
            navigate(&state, "/user"),
            Navigation::Redirect { to: "/auth" }
        );

        state.session.set_token("abc123");
        assert!(matches!(
            navigate(&state, "/user"),
            Navigation::Allow { .. }
        ));
    }
}
