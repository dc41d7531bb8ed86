//! Chrome wrapped around the signed-in pages

use super::{Footer, Header};
use leptos::prelude::*;

/// Header, page content, footer. Layout only: no data, no guard.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            {children()}
            <Footer />
        </div>
    }
}
