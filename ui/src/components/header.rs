//! Header and footer chrome

use crate::state::AppState;
use chat_shell::AuthEvent;
use leptos::prelude::*;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let title = state.chrome.title.clone();
    let session = state.session;
    let user_name = move || session.get().user.map(|u| u.name).unwrap_or_default();
    let on_logout = move |_| state.handle(AuthEvent::LoggedOut);

    view! {
        <header class="app-header">
            <a href="/" class="logo">
                <h1>{title}</h1>
            </a>
            <nav class="app-nav">
                <a href="/groups" class="btn btn-ghost">"Groups"</a>
                <span class="user-name">{user_name}</span>
                <button on:click=on_logout class="btn btn-ghost">
                    "Sign Out"
                </button>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <footer class="app-footer">{state.chrome.footer.clone()}</footer>
    }
}
