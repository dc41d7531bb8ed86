//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the chat-shell CLI.

use crate::routing::{Navigation, ViewId};
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print a warning message to stderr
    pub fn warning(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            eprintln!("  [WARN] {}", message);
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a table header row
    pub fn table_header(&self, columns: &[&str]) {
        let header: String = columns
            .iter()
            .map(|c| format!("{:<16}", c))
            .collect::<Vec<_>>()
            .join(" ");
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(columns.len() * 17).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(columns.len() * 17));
        }
    }

    /// Print a table row
    pub fn table_row(&self, values: &[&str]) {
        let row: String = values
            .iter()
            .map(|v| format!("{:<16}", v))
            .collect::<Vec<_>>()
            .join(" ");
        println!("    {}", row);
    }

    /// Print the outcome of a navigation
    pub fn navigation(&self, path: &str, navigation: &Navigation<ViewId>) {
        let (label, detail) = describe(navigation);
        if self.colored {
            let label = match navigation {
                Navigation::Render(_) => label.green().bold().to_string(),
                Navigation::Redirect(_) => label.yellow().bold().to_string(),
                Navigation::NotFound(_) => label.red().bold().to_string(),
            };
            println!("  {} {} {}", path.bright_white(), "→".dimmed(), label);
        } else {
            println!("  {} -> {}", path, label);
        }
        for (key, value) in detail {
            self.kv(&key, &value);
        }
    }
}

fn describe(navigation: &Navigation<ViewId>) -> (String, Vec<(String, String)>) {
    match navigation {
        Navigation::Render(m) => {
            let mut detail = vec![
                ("view".to_string(), m.view.to_string()),
                ("pattern".to_string(), m.pattern.clone()),
            ];
            detail.extend(m.params.iter().map(|(k, v)| (format!("param {}", k), v.clone())));
            ("render".to_string(), detail)
        }
        Navigation::Redirect(to) => (format!("redirect {}", to), Vec::new()),
        Navigation::NotFound(view) => (
            "not found".to_string(),
            vec![("view".to_string(), view.to_string())],
        ),
    }
}
