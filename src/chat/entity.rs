//! Chat entities as supplied by the chat collection store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a chat; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChatId(String);

impl ChatId {
    /// # Panics
    ///
    /// Panics on an empty id. Callers own id validity.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.is_empty(), "chat id must not be empty");
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChatId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("chat id must not be empty".to_string());
        }
        Ok(Self(value))
    }
}

impl From<ChatId> for String {
    fn from(id: ChatId) -> Self {
        id.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to an avatar image (URL or asset path)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarRef(pub String);

/// One chat as listed in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatEntity {
    #[serde(rename = "_id", alias = "id")]
    pub id: ChatId,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "avatar", default)]
    pub avatars: Vec<AvatarRef>,
    #[serde(rename = "groupChat", default)]
    pub is_group: bool,
}

impl ChatEntity {
    pub fn direct(id: &str, display_name: &str) -> Self {
        Self {
            id: ChatId::new(id),
            display_name: display_name.to_string(),
            avatars: Vec::new(),
            is_group: false,
        }
    }

    pub fn group(id: &str, display_name: &str) -> Self {
        Self {
            is_group: true,
            ..Self::direct(id, display_name)
        }
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatars.push(AvatarRef(avatar.to_string()));
        self
    }
}
