//! # chat-shell
//!
//! The client-side shell of a chat application: which screen a session may
//! see, how pages are wrapped in the app chrome, and what a chat list row
//! renders.
//!
//! ## Overview
//!
//! - [`routing`] matches a path against the route table, runs the
//!   [`RouteGuard`] for the current [`SessionState`] and produces a
//!   [`Navigation`]. View code is resolved afterwards through a
//!   [`ViewResolver`], so a slow load never changes the decision.
//! - [`layout`] wraps any [`View`] between the header and footer.
//! - [`chat`] turns chat entities plus presence/unread snapshots into rows.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chat_shell::{Navigation, SessionState, ShellConfig};
//!
//! let config = ShellConfig::default();
//! let navigator = config.navigator()?;
//!
//! match navigator.navigate("/groups", &SessionState::anonymous()) {
//!     Navigation::Redirect(to) => assert_eq!(to, "/login"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Route table
//!
//! | Path | Access | View |
//! |------|--------|------|
//! | `/` | signed in | home |
//! | `/chat/:chatId` | signed in | chat |
//! | `/groups` | signed in | groups |
//! | `/login` | signed out only, falls back to `/` | login |
//! | `*` | everyone | not found |

#![warn(rustdoc::missing_crate_level_docs)]

/// Chat list entities, view state and row rendering.
pub mod chat;
/// Command-line interface for the `chat-shell` binary.
#[cfg(feature = "cli")]
pub mod cli;
/// Layout composition around page views.
pub mod layout;
/// Element tree the views render into.
pub mod markup;
/// The shell's top-level pages.
pub mod pages;
/// Path matching, access guard and navigation.
pub mod routing;
/// Session state and auth events.
pub mod session;
/// Core error types.
pub mod types;
/// Configuration utilities (TOML) and logging setup.
pub mod utils;

// Re-export commonly used types
pub use chat::{ChatEntity, ChatId, ChatListItemViewState, ChatListRenderer, UnreadAlert};
pub use layout::{wrap, AppLayout, Chrome, View};
pub use markup::Node;
pub use pages::{PageProps, StaticPages};
pub use routing::{
    Access, Decision, LoadState, Navigation, Navigator, RouteGuard, RouteTable, ViewId,
    ViewResolver,
};
pub use session::{AuthEvent, SessionState, SessionStore, UserIdentity};
pub use types::{Result, ShellError};
pub use utils::toml_config::{ConfigError, ShellConfig};
