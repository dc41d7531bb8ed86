//! Assembling view states from store snapshots and rendering whole lists
//! with per-row memoization.

use super::entity::{ChatEntity, ChatId};
use super::item::{render_markup, ChatListItemViewState, UnreadAlert};
use crate::markup::Node;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Presence and unread data at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceSnapshot {
    online: HashSet<ChatId>,
    unread: HashMap<ChatId, UnreadAlert>,
}

impl PresenceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_online(&mut self, chat: &ChatId, online: bool) {
        if online {
            self.online.insert(chat.clone());
        } else {
            self.online.remove(chat);
        }
    }

    /// Record an unread count; zero clears the alert.
    pub fn set_unread(&mut self, chat: &ChatId, count: u32) {
        match UnreadAlert::try_new(count) {
            Some(alert) => {
                self.unread.insert(chat.clone(), alert);
            }
            None => {
                self.unread.remove(chat);
            }
        }
    }

    pub fn is_online(&self, chat: &ChatId) -> bool {
        self.online.contains(chat)
    }

    pub fn unread(&self, chat: &ChatId) -> Option<UnreadAlert> {
        self.unread.get(chat).copied()
    }
}

/// Build one view state per chat, in list order.
///
/// `active_chat` gets the same-sender emphasis.
pub fn build_view_states(
    chats: &[ChatEntity],
    presence: &PresenceSnapshot,
    active_chat: Option<&ChatId>,
) -> Vec<ChatListItemViewState> {
    chats
        .iter()
        .enumerate()
        .map(|(index, chat)| ChatListItemViewState {
            is_same_sender: active_chat == Some(&chat.id),
            is_online: presence.is_online(&chat.id),
            unread_alert: presence.unread(&chat.id),
            list_index: index,
            chat: chat.clone(),
        })
        .collect()
}

/// Unread entry as the message-alert store publishes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadEntry {
    pub chat_id: ChatId,
    pub count: u32,
}

/// Everything needed to render the chat list, in the stores' wire shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatListSnapshot {
    #[serde(default)]
    pub chats: Vec<ChatEntity>,
    #[serde(default)]
    pub online_chats: Vec<ChatId>,
    #[serde(default)]
    pub new_messages_alert: Vec<UnreadEntry>,
    #[serde(default)]
    pub active_chat: Option<ChatId>,
}

impl ChatListSnapshot {
    pub fn presence(&self) -> PresenceSnapshot {
        let mut presence = PresenceSnapshot::new();
        for id in &self.online_chats {
            presence.set_online(id, true);
        }
        for entry in &self.new_messages_alert {
            presence.set_unread(&entry.chat_id, entry.count);
        }
        presence
    }

    pub fn view_states(&self) -> Vec<ChatListItemViewState> {
        build_view_states(&self.chats, &self.presence(), self.active_chat.as_ref())
    }

    /// Make `chat` the active chat and drop its unread alert.
    ///
    /// Returns `false` when the snapshot was already in that state.
    pub fn open_chat(&mut self, chat: &ChatId) -> bool {
        let before = (self.active_chat.clone(), self.new_messages_alert.len());
        self.active_chat = Some(chat.clone());
        self.new_messages_alert.retain(|entry| entry.chat_id != *chat);
        before != (self.active_chat.clone(), self.new_messages_alert.len())
    }
}

struct CachedRow {
    state: ChatListItemViewState,
    markup: Node,
}

/// Renders lists of rows, re-rendering only rows whose state changed.
#[derive(Default)]
pub struct ChatListRenderer {
    cache: HashMap<ChatId, CachedRow>,
    hits: u64,
    misses: u64,
}

impl ChatListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if two states share a chat id.
    pub fn render(&mut self, states: &[ChatListItemViewState]) -> Vec<Node> {
        let mut seen = HashSet::with_capacity(states.len());
        for state in states {
            assert!(
                seen.insert(&state.chat.id),
                "duplicate chat id '{}' in chat list",
                state.chat.id
            );
        }
        self.cache.retain(|id, _| seen.contains(id));

        let mut rows = Vec::with_capacity(states.len());
        for state in states {
            if let Some(cached) = self
                .cache
                .get(&state.chat.id)
                .filter(|cached| cached.state == *state)
            {
                self.hits += 1;
                rows.push(cached.markup.clone());
                continue;
            }

            self.misses += 1;
            let markup = render_markup(state);
            self.cache.insert(
                state.chat.id.clone(),
                CachedRow {
                    state: state.clone(),
                    markup: markup.clone(),
                },
            );
            rows.push(markup);
        }

        tracing::debug!(rows = rows.len(), hits = self.hits, misses = self.misses, "chat list rendered");
        rows
    }

    /// Render the list as one fragment
    pub fn render_list(&mut self, states: &[ChatListItemViewState]) -> Node {
        Node::Fragment(self.render(states))
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn cached_rows(&self) -> usize {
        self.cache.len()
    }
}
