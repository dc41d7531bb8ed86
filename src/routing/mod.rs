//! Client-side routing: path patterns, the route table, the access guard and
//! the navigator that ties them together.

pub mod guard;
pub mod navigator;
pub mod pattern;
pub mod table;

pub use guard::{Access, Decision, RouteGuard};
pub use navigator::{LoadState, Navigation, Navigator, RouteMatch, ViewResolver};
pub use pattern::{normalize_path, Params, PathPattern};
pub use table::{CompiledRoute, RouteEntry, RouteTable, RouteTableBuilder, CATCH_ALL};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised while building a route table.
///
/// These are configuration mistakes and are meant to abort startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid route pattern '{0}': {1}")]
    InvalidPattern(String, String),

    #[error("Routes '{0}' and '{1}' can match the same path")]
    Ambiguous(String, String),

    #[error("Route table has no catch-all ('*') entry")]
    MissingCatchAll,

    #[error("Route table has more than one catch-all ('*') entry")]
    DuplicateCatchAll,

    #[error("Login path '{0}' does not render for a signed-out session")]
    RedirectLoop(String),
}

/// Top-level views of the chat shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Home,
    Login,
    Chat,
    Groups,
    NotFound,
}

impl ViewId {
    pub fn name(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Login => "login",
            ViewId::Chat => "chat",
            ViewId::Groups => "groups",
            ViewId::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The shell's route table.
///
/// `/`, `/chat/:chatId` and `/groups` sit under one protected group, `/login`
/// (at `login_path`) is guest-only and falls back to `home_path`, everything
/// else lands on the not-found view.
pub fn app_routes(login_path: &str, home_path: &str) -> Result<RouteTable<ViewId>, RouteError> {
    RouteTable::builder()
        .route(
            RouteEntry::group(Access::Authenticated)
                .child(RouteEntry::page("/chat/:chatId", ViewId::Chat))
                .child(RouteEntry::page("/groups", ViewId::Groups))
                .child(RouteEntry::page(home_path, ViewId::Home)),
        )
        .route(RouteEntry::page(login_path, ViewId::Login).guest_only(home_path))
        .route(RouteEntry::page(CATCH_ALL, ViewId::NotFound))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_shape() {
        let table = app_routes("/login", "/").unwrap();
        let summary: Vec<(&str, ViewId, bool)> = table
            .routes()
            .iter()
            .map(|r| (r.pattern.as_str(), r.view, r.requires_auth()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("/chat/:chatId", ViewId::Chat, true),
                ("/groups", ViewId::Groups, true),
                ("/", ViewId::Home, true),
                ("/login", ViewId::Login, false),
            ]
        );
        assert_eq!(*table.catch_all(), ViewId::NotFound);
    }

    #[test]
    fn test_login_path_colliding_with_protected_route() {
        let result = app_routes("/groups", "/");
        assert!(matches!(result, Err(RouteError::Ambiguous(_, _))));
    }

    #[test]
    fn test_view_id_names() {
        assert_eq!(ViewId::NotFound.to_string(), "not_found");
        assert_eq!(
            serde_json::to_string(&ViewId::Groups).unwrap(),
            "\"groups\""
        );
    }
}
