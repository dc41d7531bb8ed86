//! Session state and the auth-event handler that owns its mutation.
//!
//! The guard only ever sees a [`SessionState`] snapshot. The only way to move
//! between authenticated and unauthenticated is [`SessionStore::apply`].

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Snapshot of who is using the shell right now
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

impl SessionState {
    /// A session with nobody signed in
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: UserIdentity) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Login/logout transitions coming from the auth flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    LoggedIn(UserIdentity),
    LoggedOut,
}

/// Process-wide session holder.
///
/// Cloning yields another handle to the same state. Writes go through
/// [`apply`](Self::apply) only; readers take snapshots.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new(initial: SessionState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
        }
    }

    /// Apply an auth event, returning the session as it is afterwards.
    pub fn apply(&self, event: AuthEvent) -> SessionState {
        let mut state = self.state.write();
        match event {
            AuthEvent::LoggedIn(user) => {
                tracing::info!(user_id = %user.id, "session authenticated");
                state.user = Some(user);
            }
            AuthEvent::LoggedOut => {
                if let Some(previous) = state.user.take() {
                    tracing::info!(user_id = %previous.id, "session cleared");
                }
            }
        }
        state.clone()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let store = SessionStore::default();
        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot(), SessionState::anonymous());
    }

    #[test]
    fn test_login_then_logout() {
        let store = SessionStore::default();
        let after_login = store.apply(AuthEvent::LoggedIn(UserIdentity::new("u1", "Ada")));
        assert!(after_login.is_authenticated());
        assert!(store.is_authenticated());

        let after_logout = store.apply(AuthEvent::LoggedOut);
        assert!(!after_logout.is_authenticated());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_replaces_identity() {
        let store = SessionStore::new(SessionState::signed_in(UserIdentity::new("u1", "Ada")));
        store.apply(AuthEvent::LoggedIn(UserIdentity::new("u2", "Grace")));
        assert_eq!(store.snapshot().user.map(|u| u.id), Some("u2".to_string()));
    }

    #[test]
    fn test_logout_when_anonymous_is_noop() {
        let store = SessionStore::default();
        let state = store.apply(AuthEvent::LoggedOut);
        assert_eq!(state, SessionState::anonymous());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::default();
        let reader = store.clone();
        store.apply(AuthEvent::LoggedIn(UserIdentity::new("u1", "Ada")));
        assert!(reader.is_authenticated());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = SessionStore::new(SessionState::signed_in(UserIdentity::new("u1", "Ada")));
        let snapshot = store.snapshot();
        store.apply(AuthEvent::LoggedOut);
        assert!(snapshot.is_authenticated());
    }

    #[test]
    fn test_session_deserializes_without_user() {
        let state: SessionState = serde_json::from_str("{}").unwrap();
        assert!(!state.is_authenticated());
    }
}
