use super::{chat_rows, context_action};
use crate::components::{AppLayout, ChatList};
use crate::state::AppState;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let rows = chat_rows(&state, None, false);

    view! {
        <AppLayout>
            <main class="page page-home">
                <ChatList states=rows on_context_action=context_action() />
                <section class="chat-placeholder">"Select a friend to chat"</section>
            </main>
        </AppLayout>
    }
}
