//! Chat list data contract: entities from the chat store, per-row view state
//! and the row renderer.

pub mod entity;
pub mod item;
pub mod list;

pub use entity::{AvatarRef, ChatEntity, ChatId};
pub use item::{
    chat_href, render, render_markup, ChatListItemViewState, Gesture, RenderedRow, RowOutcome,
    UnreadAlert,
};
pub use list::{build_view_states, ChatListRenderer, ChatListSnapshot, PresenceSnapshot, UnreadEntry};
