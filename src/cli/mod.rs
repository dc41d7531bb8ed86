//! CLI module for chat-shell
//!
//! Provides command-line parsing for the `chat-shell` binary, which inspects
//! the route table and renders chat list snapshots without a browser.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chat-shell - route guard and chat list inspector
#[derive(Parser, Debug)]
#[command(
    name = "chat-shell",
    version,
    about = "Inspect the chat shell's routing and chat list rendering",
    after_help = "EXAMPLES:\n    \
                  chat-shell routes                       # Show the route table\n    \
                  chat-shell route /groups                # Where does a signed-out visitor land?\n    \
                  chat-shell route /login --user ada      # ...and a signed-in one?\n    \
                  chat-shell render-list chats.json       # Render a chat list snapshot as HTML"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = crate::utils::toml_config::DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the route table in match order
    Routes,

    /// Evaluate a navigation to PATH
    Route {
        /// Path to navigate to, e.g. /chat/42
        path: String,

        /// Navigate as this signed-in user (signed out when omitted)
        #[arg(short, long)]
        user: Option<String>,

        /// Render the resulting page as HTML
        #[arg(long)]
        render: bool,

        /// Chat list snapshot (JSON) used when rendering
        #[arg(long)]
        chats: Option<PathBuf>,
    },

    /// Render a chat list snapshot (JSON) to HTML
    RenderList {
        /// Snapshot file; use '-' for stdin
        snapshot: PathBuf,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
