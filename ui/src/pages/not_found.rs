use leptos::prelude::*;

/// 404 Not Found page
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page page-not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go back to home"</a>
        </main>
    }
}
