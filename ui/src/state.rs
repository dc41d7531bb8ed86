//! Global application state

use chat_shell::chat::ChatListSnapshot;
use chat_shell::{
    AuthEvent, ChatId, Chrome, Navigator, SessionState, SessionStore, ShellConfig, ViewId,
};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

const STORAGE_KEY_SESSION: &str = "chat_shell_session";
const STORAGE_KEY_CHATS: &str = "chat_shell_chats";
/// `<script type="application/json">` the host page seeds the chat list with
const SNAPSHOT_ELEMENT_ID: &str = "chat-snapshot";

/// Global application state
#[derive(Clone)]
pub struct AppState {
    store: SessionStore,
    /// Reactive mirror of the session store
    pub session: RwSignal<SessionState>,
    /// Chat list as last received from the store
    pub chats: RwSignal<ChatListSnapshot>,
    pub navigator: StoredValue<Navigator<ViewId>>,
    pub chrome: Chrome,
}

impl AppState {
    /// Build state from the default configuration and whatever the last
    /// visit left in local storage.
    pub fn new() -> Self {
        let config = ShellConfig::default();
        let navigator = config.navigator().expect("default route table");

        let initial: SessionState = LocalStorage::get(STORAGE_KEY_SESSION).unwrap_or_default();
        let chats: ChatListSnapshot = LocalStorage::get(STORAGE_KEY_CHATS).unwrap_or_default();

        let state = Self {
            session: RwSignal::new(initial.clone()),
            store: SessionStore::new(initial),
            chats: RwSignal::new(chats),
            navigator: StoredValue::new(navigator),
            chrome: config.layout,
        };
        if let Some(snapshot) = embedded_snapshot() {
            state.set_chats(snapshot);
        }
        state
    }

    /// Route an auth event through the session store and persist the result.
    pub fn handle(&self, event: AuthEvent) {
        let next = self.store.apply(event);
        if next.is_authenticated() {
            if let Err(e) = LocalStorage::set(STORAGE_KEY_SESSION, &next) {
                tracing::warn!("failed to persist session: {}", e);
            }
        } else {
            LocalStorage::delete(STORAGE_KEY_SESSION);
        }
        self.session.set(next);
    }

    pub fn set_chats(&self, snapshot: ChatListSnapshot) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_CHATS, &snapshot) {
            tracing::warn!("failed to persist chat list: {}", e);
        }
        self.chats.set(snapshot);
    }

    /// Mark `chat` as the open conversation and clear its unread alert.
    pub fn open_chat(&self, chat: &ChatId) {
        let mut snapshot = self.chats.get_untracked();
        if snapshot.open_chat(chat) {
            self.set_chats(snapshot);
        }
    }
}

/// Chat list the host page embedded, if any.
fn embedded_snapshot() -> Option<ChatListSnapshot> {
    let json = document()
        .get_element_by_id(SNAPSHOT_ELEMENT_ID)?
        .text_content()?;
    match serde_json::from_str(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("ignoring malformed #{}: {}", SNAPSHOT_ELEMENT_ID, e);
            None
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
