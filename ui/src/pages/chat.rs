//! A single conversation

use super::{chat_rows, context_action};
use crate::components::{AppLayout, ChatList};
use crate::state::AppState;
use chat_shell::ChatId;
use leptos::prelude::*;

/// Conversation page for `chat_id`, with the list alongside.
///
/// An empty id cannot reach this page: the `:chatId` segment never matches
/// an empty segment.
#[component]
pub fn ChatPage(chat_id: String) -> impl IntoView {
    let state = expect_context::<AppState>();
    let active = ChatId::try_from(chat_id.clone()).ok();
    if let Some(id) = &active {
        state.open_chat(id);
    }
    let rows = chat_rows(&state, active, false);

    view! {
        <AppLayout>
            <main class="page page-chat">
                <ChatList states=rows on_context_action=context_action() />
                <section class="chat-window" data-chat-id=chat_id></section>
            </main>
        </AppLayout>
    }
}
