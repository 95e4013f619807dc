//! Explicit auth session.
//!
//! The session is an owned object with a clear lifecycle: created on
//! login, destroyed on logout. The bearer token lives only in memory for
//! the lifetime of the session; nothing is persisted across restarts.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::CareFlowError;

use super::client::ApiClient;
use super::types::User;

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user,
            created_at: Utc::now(),
        }
    }
}

/// Managed Tauri state holding the shared HTTP client and the session slot.
pub struct ApiState {
    http: reqwest::Client,
    session: Mutex<Option<Session>>,
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            session: Mutex::new(None),
        }
    }

    /// Build a client against the configured base URL. The HTTP connection
    /// pool is shared across clients.
    pub fn client(&self, base_url: &str) -> Result<ApiClient, CareFlowError> {
        ApiClient::new(self.http.clone(), base_url)
    }

    pub fn open_session(&self, token: String, user: User) {
        *self.session.lock().unwrap() = Some(Session::new(token, user));
    }

    pub fn close_session(&self) {
        *self.session.lock().unwrap() = None;
    }

    /// Replace the cached user after a fresh `auth/me` fetch.
    pub fn refresh_user(&self, user: User) {
        if let Some(session) = self.session.lock().unwrap().as_mut() {
            session.user = user;
        }
    }

    pub fn token(&self) -> Result<String, CareFlowError> {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or_else(|| CareFlowError::Auth("no active session".to_string()))
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.lock().unwrap().as_ref().map(|s| s.user.clone())
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;

    fn user() -> User {
        User {
            id: 1,
            email: "ana@clinic.com".to_string(),
            full_name: "Ana Souza".to_string(),
            role: Role::Comum,
            is_active: true,
            created_at: None,
            companies: vec![],
            modules: vec![],
        }
    }

    #[test]
    fn test_session_lifecycle() {
        let state = ApiState::new();
        assert!(state.token().is_err());
        assert!(state.current_user().is_none());

        state.open_session("tok-123".to_string(), user());
        assert_eq!(state.token().unwrap(), "tok-123");
        assert_eq!(state.current_user().unwrap().email, "ana@clinic.com");

        state.close_session();
        assert!(matches!(state.token(), Err(CareFlowError::Auth(_))));
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_refresh_user_replaces_cached_user() {
        let state = ApiState::new();
        state.open_session("tok".to_string(), user());

        let mut updated = user();
        updated.full_name = "Ana S. Lima".to_string();
        state.refresh_user(updated);

        assert_eq!(state.current_user().unwrap().full_name, "Ana S. Lima");
    }
}
