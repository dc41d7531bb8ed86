//! Login page

use crate::state::AppState;
use chat_shell::{AuthEvent, UserIdentity};
use leptos::prelude::*;

/// Login page.
///
/// Signing in only emits an auth event; the shell's navigation reacts to the
/// new session and moves the visitor off this page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let username = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = username.get().trim().to_string();
        if name.is_empty() {
            error.set(Some("Username is required".to_string()));
            return;
        }
        error.set(None);
        state.handle(AuthEvent::LoggedIn(UserIdentity::new(name.clone(), name)));
    };

    view! {
        <main class="page page-login">
            <form on:submit=on_submit class="login-form">
                <h5>"Login"</h5>

                <Show when=move || error.get().is_some()>
                    <div class="login-error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <label class="login-label">"Username"</label>
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                    placeholder="Your username"
                    class="input"
                />
                <button type="submit" class="btn btn-primary">"Login"</button>
            </form>
        </main>
    }
}
