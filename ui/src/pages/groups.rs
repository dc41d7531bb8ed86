use super::{chat_rows, context_action};
use crate::components::{AppLayout, ChatList};
use crate::state::AppState;
use leptos::prelude::*;

/// Group chats only
#[component]
pub fn GroupsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let rows = chat_rows(&state, None, true);

    view! {
        <AppLayout>
            <main class="page page-groups">
                <ChatList states=rows on_context_action=context_action() />
            </main>
        </AppLayout>
    }
}
