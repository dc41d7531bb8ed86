//! Access decisions for a single route

use crate::session::SessionState;
use serde::{Deserialize, Serialize};

/// Path unauthenticated visitors are sent to when they hit a protected route.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Path signed-in users land on when a guest-only route has no fallback.
pub const DEFAULT_HOME_PATH: &str = "/";

/// Access policy fixed on a route when the table is built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Access {
    /// Renders for everyone
    #[default]
    Open,
    /// Requires a signed-in session
    Authenticated,
    /// Only reachable while signed out (login, signup)
    GuestOnly {
        #[serde(default)]
        fallback: Option<String>,
    },
}

impl Access {
    pub fn guest_only(fallback: impl Into<String>) -> Self {
        Access::GuestOnly {
            fallback: Some(fallback.into()),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Access::Authenticated)
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Show the requested view (and its nested outlet)
    Render,
    /// Show nothing from the requested view and navigate here instead
    Redirect(String),
}

impl Decision {
    pub fn is_render(&self) -> bool {
        matches!(self, Decision::Render)
    }
}

/// Decides whether a route renders for a given session.
///
/// Holds only the two paths it can redirect to; it never reads or writes
/// session state on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    login_path: String,
    home_path: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH, DEFAULT_HOME_PATH)
    }
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>, home_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            home_path: home_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    pub fn decide(&self, access: &Access, session: &SessionState) -> Decision {
        let decision = match access {
            Access::Authenticated if !session.is_authenticated() => {
                Decision::Redirect(self.login_path.clone())
            }
            Access::GuestOnly { fallback } if session.is_authenticated() => Decision::Redirect(
                fallback.clone().unwrap_or_else(|| self.home_path.clone()),
            ),
            _ => Decision::Render,
        };

        tracing::debug!(
            ?access,
            authenticated = session.is_authenticated(),
            ?decision,
            "route guard decision"
        );
        decision
    }

    /// Flag-based form of [`decide`](Self::decide).
    ///
    /// A route that does not require auth but carries a fallback is treated
    /// as guest-only.
    pub fn decide_for(
        &self,
        requires_auth: bool,
        session: &SessionState,
        fallback: Option<&str>,
    ) -> Decision {
        let access = match (requires_auth, fallback) {
            (true, _) => Access::Authenticated,
            (false, Some(path)) => Access::guest_only(path),
            (false, None) => Access::Open,
        };
        self.decide(&access, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserIdentity;

    fn signed_in() -> SessionState {
        SessionState::signed_in(UserIdentity::new("u1", "Ada"))
    }

    #[test]
    fn test_protected_route_redirects_anonymous() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.decide(&Access::Authenticated, &SessionState::anonymous()),
            Decision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_protected_route_renders_for_user() {
        let guard = RouteGuard::default();
        assert_eq!(guard.decide(&Access::Authenticated, &signed_in()), Decision::Render);
    }

    #[test]
    fn test_guest_only_uses_fallback() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.decide(&Access::guest_only("/groups"), &signed_in()),
            Decision::Redirect("/groups".to_string())
        );
    }

    #[test]
    fn test_guest_only_without_fallback_goes_home() {
        let guard = RouteGuard::new("/signin", "/inbox");
        assert_eq!(
            guard.decide(&Access::GuestOnly { fallback: None }, &signed_in()),
            Decision::Redirect("/inbox".to_string())
        );
    }

    #[test]
    fn test_guest_only_renders_for_anonymous() {
        let guard = RouteGuard::default();
        assert!(guard
            .decide(&Access::guest_only("/"), &SessionState::anonymous())
            .is_render());
    }

    #[test]
    fn test_open_route_always_renders() {
        let guard = RouteGuard::default();
        assert!(guard.decide(&Access::Open, &SessionState::anonymous()).is_render());
        assert!(guard.decide(&Access::Open, &signed_in()).is_render());
    }

    #[test]
    fn test_custom_login_path() {
        let guard = RouteGuard::new("/signin", "/");
        assert_eq!(
            guard.decide(&Access::Authenticated, &SessionState::anonymous()),
            Decision::Redirect("/signin".to_string())
        );
    }

    #[test]
    fn test_flag_form() {
        let guard = RouteGuard::default();
        let anon = SessionState::anonymous();
        assert_eq!(
            guard.decide_for(true, &anon, None),
            Decision::Redirect("/login".to_string())
        );
        assert_eq!(
            guard.decide_for(false, &signed_in(), Some("/")),
            Decision::Redirect("/".to_string())
        );
        assert!(guard.decide_for(false, &signed_in(), None).is_render());
        assert!(guard.decide_for(true, &signed_in(), Some("/")).is_render());
    }

    #[test]
    fn test_access_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            access: Access,
        }
        let parsed: Wrapper =
            toml::from_str("access = { kind = \"guest_only\", fallback = \"/\" }").unwrap();
        assert_eq!(parsed.access, Access::guest_only("/"));
    }
}
