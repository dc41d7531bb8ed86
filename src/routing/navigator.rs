//! Per-navigation evaluation: match the path, run the guards, then resolve
//! the view asynchronously.
//!
//! The decision is always made synchronously and completely before any view
//! code is fetched, so a slow or failing [`ViewResolver`] can never change
//! which view (or redirect) a path leads to.

use super::guard::{Decision, RouteGuard};
use super::pattern::Params;
use super::table::RouteTable;
use super::RouteError;
use crate::session::SessionState;
use crate::types::ShellError;
use async_trait::async_trait;

/// A matched, permitted route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<V> {
    pub view: V,
    pub pattern: String,
    pub params: Params,
    /// Layout views around the outlet, outermost first
    pub layouts: Vec<V>,
}

impl<V> RouteMatch<V> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Result of evaluating one navigation
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<V> {
    Render(RouteMatch<V>),
    Redirect(String),
    /// No pattern matched; carries the catch-all view
    NotFound(V),
}

impl<V: Clone> Navigation<V> {
    /// View that will be shown once resolved, if any
    pub fn view(&self) -> Option<&V> {
        match self {
            Navigation::Render(m) => Some(&m.view),
            Navigation::NotFound(view) => Some(view),
            Navigation::Redirect(_) => None,
        }
    }
}

/// Loads the code/content for a view.
///
/// Implementations may be slow (lazy chunks, remote fetches); the navigator
/// only calls them after the guard has decided.
#[async_trait]
pub trait ViewResolver<V: Sync>: Send + Sync {
    type Output: Send;

    async fn resolve(&self, view: &V) -> Result<Self::Output, ShellError>;
}

/// Where a navigation stands while its view is being resolved
#[derive(Debug)]
pub enum LoadState<V, T> {
    /// Decision made, view still resolving; show a placeholder
    Pending(V),
    Ready { view: V, output: T },
    Redirect(String),
    Failed { view: V, error: ShellError },
}

impl<V: Clone, T> LoadState<V, T> {
    /// Placeholder state to show while `navigation` resolves.
    pub fn pending(navigation: &Navigation<V>) -> Self {
        match navigation {
            Navigation::Redirect(path) => LoadState::Redirect(path.clone()),
            Navigation::Render(m) => LoadState::Pending(m.view.clone()),
            Navigation::NotFound(view) => LoadState::Pending(view.clone()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending(_))
    }
}

/// Route table plus guard
#[derive(Debug, Clone)]
pub struct Navigator<V> {
    table: RouteTable<V>,
    guard: RouteGuard,
}

impl<V: Clone> Navigator<V> {
    /// Build a navigator, refusing setups where the login redirect target
    /// would itself redirect a signed-out visitor.
    pub fn new(table: RouteTable<V>, guard: RouteGuard) -> Result<Self, RouteError> {
        let navigator = Self { table, guard };
        let login = navigator.guard.login_path().to_string();
        if let Navigation::Redirect(_) = navigator.navigate(&login, &SessionState::anonymous()) {
            return Err(RouteError::RedirectLoop(login));
        }
        Ok(navigator)
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    /// Decide what `path` shows for `session`.
    pub fn navigate(&self, path: &str, session: &SessionState) -> Navigation<V> {
        let Some((route, params)) = self.table.find(path) else {
            return Navigation::NotFound(self.table.catch_all().clone());
        };

        for access in &route.guards {
            if let Decision::Redirect(target) = self.guard.decide(access, session) {
                tracing::debug!(%path, %target, "navigation redirected");
                return Navigation::Redirect(target);
            }
        }

        Navigation::Render(RouteMatch {
            view: route.view.clone(),
            pattern: route.pattern.to_string(),
            params,
            layouts: route.layouts.clone(),
        })
    }
}

impl<V: Clone + Send + Sync> Navigator<V> {
    /// Decide, then resolve the chosen view.
    pub async fn load<R>(&self, path: &str, session: &SessionState, resolver: &R) -> LoadState<V, R::Output>
    where
        R: ViewResolver<V>,
    {
        let navigation = self.navigate(path, session);
        resolve(&navigation, resolver).await
    }
}

/// Resolve the view a decided navigation points at.
pub async fn resolve<V, R>(navigation: &Navigation<V>, resolver: &R) -> LoadState<V, R::Output>
where
    V: Clone + Send + Sync,
    R: ViewResolver<V>,
{
    let view = match navigation {
        Navigation::Redirect(path) => return LoadState::Redirect(path.clone()),
        Navigation::Render(m) => m.view.clone(),
        Navigation::NotFound(view) => view.clone(),
    };

    match resolver.resolve(&view).await {
        Ok(output) => LoadState::Ready { view, output },
        Err(error) => {
            tracing::warn!(%error, "view failed to load");
            LoadState::Failed { view, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{app_routes, ViewId};
    use crate::session::UserIdentity;

    fn navigator() -> Navigator<ViewId> {
        Navigator::new(app_routes("/login", "/").unwrap(), RouteGuard::default()).unwrap()
    }

    fn user() -> SessionState {
        SessionState::signed_in(UserIdentity::new("u1", "Ada"))
    }

    #[test]
    fn test_groups_redirects_anonymous() {
        assert_eq!(
            navigator().navigate("/groups", &SessionState::anonymous()),
            Navigation::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_chat_renders_with_param() {
        let Navigation::Render(m) = navigator().navigate("/chat/abc?x=1", &user()) else {
            panic!("expected render");
        };
        assert_eq!(m.view, ViewId::Chat);
        assert_eq!(m.param("chatId"), Some("abc"));
        assert_eq!(m.pattern, "/chat/:chatId");
    }

    #[test]
    fn test_login_redirects_signed_in_user_home() {
        assert_eq!(
            navigator().navigate("/login", &user()),
            Navigation::Redirect("/".to_string())
        );
    }

    #[test]
    fn test_unknown_is_not_found_for_everyone() {
        let nav = navigator();
        assert_eq!(
            nav.navigate("/unknown-xyz", &SessionState::anonymous()),
            Navigation::NotFound(ViewId::NotFound)
        );
        assert_eq!(
            nav.navigate("/unknown-xyz", &user()),
            Navigation::NotFound(ViewId::NotFound)
        );
    }

    #[test]
    fn test_redirect_loop_rejected() {
        let table = app_routes("/login", "/").unwrap();
        let result = Navigator::new(table, RouteGuard::new("/groups", "/"));
        assert_eq!(result.err(), Some(RouteError::RedirectLoop("/groups".to_string())));
    }

    #[test]
    fn test_pending_state() {
        let nav = navigator();
        let state: LoadState<ViewId, ()> = LoadState::pending(&nav.navigate("/", &user()));
        assert!(state.is_pending());
        let state: LoadState<ViewId, ()> =
            LoadState::pending(&nav.navigate("/", &SessionState::anonymous()));
        assert!(matches!(state, LoadState::Redirect(ref p) if p == "/login"));
    }
}
