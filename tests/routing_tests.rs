//! Integration tests for route matching, the access guard and view loading

use async_trait::async_trait;
use chat_shell::routing::navigator::resolve;
use chat_shell::routing::{app_routes, RouteEntry, RouteError, CATCH_ALL};
use chat_shell::{
    Access, AuthEvent, Decision, LoadState, Navigation, Navigator, RouteGuard, RouteTable,
    SessionState, SessionStore, ShellConfig, ShellError, UserIdentity, ViewId, ViewResolver,
};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn navigator() -> Navigator<ViewId> {
    ShellConfig::default().navigator().unwrap()
}

fn session(authenticated: bool) -> SessionState {
    if authenticated {
        SessionState::signed_in(UserIdentity::new("u1", "ada"))
    } else {
        SessionState::anonymous()
    }
}

// =============================================================================
// Guard properties
// =============================================================================

#[rstest]
#[case(false, false, None)]
#[case(false, true, None)]
#[case(true, true, None)]
#[case(true, false, Some("/login"))]
fn test_protected_and_open_routes(
    #[case] requires_auth: bool,
    #[case] authenticated: bool,
    #[case] redirect: Option<&str>,
) {
    let decision = RouteGuard::default().decide_for(requires_auth, &session(authenticated), None);
    match redirect {
        None => assert_eq!(decision, Decision::Render),
        Some(to) => assert_eq!(decision, Decision::Redirect(to.to_string())),
    }
}

#[rstest]
#[case(true, Decision::Redirect("/".to_string()))]
#[case(false, Decision::Render)]
fn test_guest_only_route(#[case] authenticated: bool, #[case] expected: Decision) {
    let decision = RouteGuard::default().decide(&Access::guest_only("/"), &session(authenticated));
    assert_eq!(decision, expected);
}

#[test]
fn test_decision_is_idempotent() {
    let guard = RouteGuard::default();
    let anonymous = SessionState::anonymous();
    let first = guard.decide(&Access::Authenticated, &anonymous);
    for _ in 0..10 {
        assert_eq!(guard.decide(&Access::Authenticated, &anonymous), first);
    }
}

// =============================================================================
// Navigation scenarios
// =============================================================================

#[rstest]
#[case("/", false, Navigation::Redirect("/login".to_string()))]
#[case("/groups", false, Navigation::Redirect("/login".to_string()))]
#[case("/chat/42", false, Navigation::Redirect("/login".to_string()))]
#[case("/login", true, Navigation::Redirect("/".to_string()))]
#[case("/unknown-xyz", false, Navigation::NotFound(ViewId::NotFound))]
#[case("/unknown-xyz", true, Navigation::NotFound(ViewId::NotFound))]
#[case("/chat", true, Navigation::NotFound(ViewId::NotFound))]
fn test_navigation_outcomes(
    #[case] path: &str,
    #[case] authenticated: bool,
    #[case] expected: Navigation<ViewId>,
) {
    assert_eq!(navigator().navigate(path, &session(authenticated)), expected);
}

#[rstest]
#[case("/", ViewId::Home)]
#[case("/groups", ViewId::Groups)]
#[case("/groups/", ViewId::Groups)]
#[case("//groups", ViewId::Groups)]
#[case("/chat/42", ViewId::Chat)]
#[case("/chat/42?tab=media#latest", ViewId::Chat)]
fn test_signed_in_renders(#[case] path: &str, #[case] view: ViewId) {
    match navigator().navigate(path, &session(true)) {
        Navigation::Render(matched) => assert_eq!(matched.view, view),
        other => panic!("{} should render, got {:?}", path, other),
    }
}

#[test]
fn test_signed_out_visitor_sees_login() {
    match navigator().navigate("/login", &SessionState::anonymous()) {
        Navigation::Render(matched) => assert_eq!(matched.view, ViewId::Login),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_chat_param_is_decoded() {
    let Navigation::Render(matched) = navigator().navigate("/chat/team%20alpha", &session(true))
    else {
        panic!("expected render");
    };
    assert_eq!(matched.param("chatId"), Some("team alpha"));
}

#[test]
fn test_login_then_logout_moves_between_pages() {
    let navigator = navigator();
    let store = SessionStore::default();

    assert!(navigator.navigate("/login", &store.snapshot()).view().is_some());

    store.apply(AuthEvent::LoggedIn(UserIdentity::new("u1", "ada")));
    assert_eq!(
        navigator.navigate("/login", &store.snapshot()),
        Navigation::Redirect("/".to_string())
    );

    store.apply(AuthEvent::LoggedOut);
    assert_eq!(
        navigator.navigate("/groups", &store.snapshot()),
        Navigation::Redirect("/login".to_string())
    );
}

// =============================================================================
// Table construction
// =============================================================================

#[test]
fn test_table_without_catch_all_is_rejected() {
    let result = RouteTable::builder()
        .route(RouteEntry::page("/", ViewId::Home))
        .build();
    assert_eq!(result.unwrap_err(), RouteError::MissingCatchAll);
}

#[test]
fn test_overlapping_routes_are_rejected() {
    let result = RouteTable::builder()
        .route(RouteEntry::page("/chat/:chatId", ViewId::Chat))
        .route(RouteEntry::page("/chat/new", ViewId::Groups))
        .route(RouteEntry::page(CATCH_ALL, ViewId::NotFound))
        .build();
    assert!(matches!(result, Err(RouteError::Ambiguous(_, _))));
}

#[test]
fn test_protected_login_path_is_a_redirect_loop() {
    let table = RouteTable::builder()
        .route(RouteEntry::page("/login", ViewId::Login).protected())
        .route(RouteEntry::page(CATCH_ALL, ViewId::NotFound))
        .build()
        .unwrap();
    let result = Navigator::new(table, RouteGuard::default());
    assert_eq!(
        result.unwrap_err(),
        RouteError::RedirectLoop("/login".to_string())
    );
}

#[test]
fn test_custom_paths() {
    let table = app_routes("/signin", "/inbox").unwrap();
    let navigator = Navigator::new(table, RouteGuard::new("/signin", "/inbox")).unwrap();
    assert_eq!(
        navigator.navigate("/groups", &SessionState::anonymous()),
        Navigation::Redirect("/signin".to_string())
    );
    assert_eq!(
        navigator.navigate("/signin", &session(true)),
        Navigation::Redirect("/inbox".to_string())
    );
}

// =============================================================================
// Asynchronous view loading
// =============================================================================

struct SlowResolver {
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowResolver {
    fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ViewResolver<ViewId> for SlowResolver {
    type Output = String;

    async fn resolve(&self, view: &ViewId) -> Result<String, ShellError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(format!("<{}>", view))
    }
}

struct FailingResolver;

#[async_trait]
impl ViewResolver<ViewId> for FailingResolver {
    type Output = String;

    async fn resolve(&self, view: &ViewId) -> Result<String, ShellError> {
        Err(ShellError::ViewLoad(
            view.to_string(),
            "chunk unavailable".to_string(),
        ))
    }
}

#[tokio::test]
async fn test_slow_resolver_settles_on_decided_view() {
    let resolver = SlowResolver::new(20);
    let navigation = navigator().navigate("/groups", &session(true));
    assert!(LoadState::<ViewId, String>::pending(&navigation).is_pending());

    match resolve(&navigation, &resolver).await {
        LoadState::Ready { view, output } => {
            assert_eq!(view, ViewId::Groups);
            assert_eq!(output, "<groups>");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_redirect_never_calls_resolver() {
    let resolver = SlowResolver::new(1);
    let state = navigator()
        .load("/groups", &SessionState::anonymous(), &resolver)
        .await;
    assert!(matches!(state, LoadState::Redirect(ref to) if to == "/login"));
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failed_load_keeps_the_decision() {
    let state = navigator()
        .load("/chat/7", &session(true), &FailingResolver)
        .await;
    match state {
        LoadState::Failed { view, error } => {
            assert_eq!(view, ViewId::Chat);
            assert!(error.to_string().contains("chunk unavailable"));
        }
        other => panic!("unexpected {:?}", other),
    }
}
