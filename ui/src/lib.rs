//! chat-shell UI
//!
//! Browser front end for the chat shell. Route matching and access decisions
//! come from `chat_shell::Navigator`; this crate only maps the decided view
//! onto Leptos components.

pub mod components;
pub mod pages;
pub mod state;

use chat_shell::routing::RouteMatch;
use chat_shell::{Navigation, ViewId};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Redirect, Router},
    hooks::use_location,
};

use pages::{
    chat::ChatPage, groups::GroupsPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    let title = app_state.chrome.title.clone();
    provide_context(app_state);

    view! {
        <Title text=title />
        <Router>
            <Shell />
        </Router>
    }
}

/// Decides what the current location shows and renders it.
///
/// The decision is recomputed whenever the path or the session changes, so
/// logging in on `/login` immediately redirects home and logging out on a
/// protected page lands on `/login`.
#[component]
fn Shell() -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();
    let navigator = state.navigator;
    let session = state.session;

    let navigation = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|session| navigator.with_value(|n| n.navigate(&path, session)))
    });

    move || match navigation.get() {
        Navigation::Redirect(to) => view! { <Redirect path=to /> }.into_any(),
        Navigation::Render(matched) => page(matched),
        Navigation::NotFound(_) => view! { <NotFoundPage /> }.into_any(),
    }
}

fn page(matched: RouteMatch<ViewId>) -> AnyView {
    match matched.view {
        ViewId::Home => view! { <HomePage /> }.into_any(),
        ViewId::Chat => {
            let chat_id = matched.param("chatId").unwrap_or_default().to_string();
            view! { <ChatPage chat_id=chat_id /> }.into_any()
        }
        ViewId::Groups => view! { <GroupsPage /> }.into_any(),
        ViewId::Login => view! { <LoginPage /> }.into_any(),
        ViewId::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
