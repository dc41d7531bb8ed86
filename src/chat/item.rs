//! One row of the chat list.
//!
//! [`render_markup`] is a pure function of [`ChatListItemViewState`]; the
//! same state always produces the same bytes. [`render`] pairs that markup
//! with the row's interaction handling.

use super::entity::{ChatEntity, ChatId};
use crate::markup::{Element, Node};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Unseen message count for a chat; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnreadAlert {
    pub count: NonZeroU32,
}

impl UnreadAlert {
    /// # Panics
    ///
    /// Panics when `count` is zero; producers must drop the alert instead.
    pub fn new(count: u32) -> Self {
        match NonZeroU32::new(count) {
            Some(count) => Self { count },
            None => panic!("unread alert count must be positive"),
        }
    }

    /// `None` for a zero count
    pub fn try_new(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(|count| Self { count })
    }

    pub fn label(&self) -> String {
        format!("{} New Message", self.count)
    }
}

/// Everything a row renders from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatListItemViewState {
    pub chat: ChatEntity,
    /// Emphasis for the currently open chat; colours only
    #[serde(default)]
    pub is_same_sender: bool,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub unread_alert: Option<UnreadAlert>,
    #[serde(default)]
    pub list_index: usize,
}

impl ChatListItemViewState {
    pub fn new(chat: ChatEntity) -> Self {
        Self {
            chat,
            is_same_sender: false,
            is_online: false,
            unread_alert: None,
            list_index: 0,
        }
    }

    /// Navigation target of the row
    pub fn href(&self) -> String {
        chat_href(&self.chat.id)
    }
}

pub fn chat_href(id: &ChatId) -> String {
    format!("/chat/{}", urlencoding::encode(id.as_str()))
}

/// How the user interacted with a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture<E> {
    /// Click / tap / enter
    Activate,
    /// Right click or long press, carrying the originating event
    ContextMenu(E),
}

/// What the shell should do after an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Navigate(String),
    /// The context action ran; navigation is suppressed
    ContextActionHandled,
}

/// A rendered row together with its context-action handler
pub struct RenderedRow<F> {
    markup: Node,
    href: String,
    chat_id: ChatId,
    is_group: bool,
    on_context_action: F,
}

impl<F> RenderedRow<F> {
    pub fn markup(&self) -> &Node {
        &self.markup
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn into_markup(self) -> Node {
        self.markup
    }

    pub fn interact<E>(&self, gesture: Gesture<E>) -> RowOutcome
    where
        F: Fn(&E, &ChatId, bool),
    {
        match gesture {
            Gesture::Activate => RowOutcome::Navigate(self.href.clone()),
            Gesture::ContextMenu(event) => {
                (self.on_context_action)(&event, &self.chat_id, self.is_group);
                RowOutcome::ContextActionHandled
            }
        }
    }
}

/// Render a row and bind `on_context_action` to it.
pub fn render<F>(state: &ChatListItemViewState, on_context_action: F) -> RenderedRow<F> {
    RenderedRow {
        markup: render_markup(state),
        href: state.href(),
        chat_id: state.chat.id.clone(),
        is_group: state.chat.is_group,
        on_context_action,
    }
}

pub fn render_markup(state: &ChatListItemViewState) -> Node {
    let chat = &state.chat;
    let (background, foreground) = if state.is_same_sender {
        ("#f0f0f0", "white")
    } else {
        ("white", "unset")
    };

    let avatars = chat.avatars.iter().fold(
        Element::new("div").attr("class", "avatar-card"),
        |card, avatar| {
            card.child(
                Element::new("img")
                    .attr("class", "avatar")
                    .attr("src", avatar.0.clone())
                    .attr("alt", chat.display_name.clone()),
            )
        },
    );

    let text = Element::new("div")
        .attr("class", "chat-item-text")
        .child(
            Element::new("span")
                .attr("class", "chat-name")
                .text(chat.display_name.clone()),
        )
        .maybe_child(state.unread_alert.map(|alert| {
            Element::new("span")
                .attr("class", "unread-alert")
                .attr("data-count", alert.count.to_string())
                .text(alert.label())
        }));

    let presence = state.is_online.then(|| {
        Element::new("span")
            .attr("class", "presence-indicator")
            .attr("aria-label", "online")
    });

    let body = Element::new("div")
        .attr("class", "chat-item-body")
        .attr(
            "style",
            format!(
                "display: flex; align-items: center; padding: 1rem; gap: 1rem; position: relative; \
                 background-color: {}; color: {}",
                background, foreground
            ),
        )
        .child(avatars)
        .child(text)
        .maybe_child(presence);

    Element::new("a")
        .attr("class", "chat-item")
        .attr("href", state.href())
        .attr("data-chat-id", chat.id.as_str())
        .attr("data-group", chat.is_group.to_string())
        .attr("data-index", state.list_index.to_string())
        .child(body)
        .into()
}
