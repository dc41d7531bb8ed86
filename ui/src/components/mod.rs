//! Reusable UI components

pub mod chat_item;
pub mod header;
pub mod layout;

pub use chat_item::{ChatItem, ChatList};
pub use header::{Footer, Header};
pub use layout::AppLayout;
