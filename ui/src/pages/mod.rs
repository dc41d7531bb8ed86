//! Top-level pages

pub mod chat;
pub mod groups;
pub mod home;
pub mod login;
pub mod not_found;

use crate::state::AppState;
use chat_shell::chat::{build_view_states, ChatListItemViewState};
use chat_shell::ChatId;
use leptos::prelude::*;

/// Rows for the current chat snapshot, highlighting `active`.
pub(crate) fn chat_rows(
    state: &AppState,
    active: Option<ChatId>,
    groups_only: bool,
) -> Signal<Vec<ChatListItemViewState>> {
    let chats = state.chats;
    Signal::derive(move || {
        chats.with(|snapshot| {
            let visible: Vec<_> = snapshot
                .chats
                .iter()
                .filter(|chat| !groups_only || chat.is_group)
                .cloned()
                .collect();
            let active = active.as_ref().or(snapshot.active_chat.as_ref());
            build_view_states(&visible, &snapshot.presence(), active)
        })
    })
}

/// Context action shared by every list
pub(crate) fn context_action() -> crate::components::chat_item::ContextAction {
    Callback::new(move |(_event, chat_id, is_group): (web_sys::MouseEvent, ChatId, bool)| {
        tracing::info!(chat_id = %chat_id, is_group, "chat context action");
    })
}
