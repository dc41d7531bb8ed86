//! Chat list rows
//!
//! Row markup comes from `chat_shell::chat`, so the browser and the CLI
//! render byte-identical rows.

use chat_shell::chat::{render, ChatListItemViewState, Gesture, RowOutcome};
use chat_shell::ChatId;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Handler for a row's context action: event, chat id, whether it is a group
pub type ContextAction = Callback<(MouseEvent, ChatId, bool)>;

/// One row of the chat list.
///
/// A left click follows the row's link. A right click or long press runs
/// `on_context_action` instead and suppresses the browser menu.
#[component]
pub fn ChatItem(state: ChatListItemViewState, on_context_action: ContextAction) -> impl IntoView {
    let row = render(&state, move |event: &MouseEvent, id: &ChatId, is_group: bool| {
        on_context_action.run((event.clone(), id.clone(), is_group))
    });
    let html = row.markup().to_html();

    let on_contextmenu = move |ev: MouseEvent| {
        ev.prevent_default();
        if row.interact(Gesture::ContextMenu(ev)) == RowOutcome::ContextActionHandled {
            tracing::debug!("context action handled");
        }
    };

    view! {
        <div class="chat-item-row" on:contextmenu=on_contextmenu inner_html=html></div>
    }
}

/// The chat list for the current snapshot.
#[component]
pub fn ChatList(
    #[prop(into)] states: Signal<Vec<ChatListItemViewState>>,
    on_context_action: ContextAction,
) -> impl IntoView {
    view! {
        <nav class="chat-list">
            <For
                each=move || states.get()
                key=|state| state.clone()
                children=move |state| view! { <ChatItem state=state on_context_action=on_context_action /> }
            />
        </nav>
    }
}
