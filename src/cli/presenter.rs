//! CLI presenter for output formatting

use chrono::Local;
use colored::*;

use crate::application::{PasteFeedback, PasteOutcome, ServiceStatus};
use crate::domain::clipboard::{ClipboardItem, ItemKind};

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list and status)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Format one history row: id, kind, local time, preview
    pub fn format_item(&self, item: &ClipboardItem) -> String {
        let kind = match item.kind() {
            ItemKind::Text => "text ".normal(),
            ItemKind::Html => "html ".magenta(),
            ItemKind::Image => "image".blue(),
        };
        format!(
            "{:>13}  {}  {}  {}",
            item.id().to_string().dimmed(),
            kind,
            item.timestamp().with_timezone(&Local).format("%H:%M:%S"),
            item.preview()
        )
    }

    /// Print the history table to stdout
    pub fn history(&self, items: &[ClipboardItem]) {
        if items.is_empty() {
            self.info("History is empty");
            return;
        }
        for item in items {
            println!("{}", self.format_item(item));
        }
    }

    /// Print a paste feedback line to stderr
    pub fn paste_feedback(&self, feedback: &PasteFeedback) {
        match feedback.outcome {
            PasteOutcome::Pasted => self.success(&feedback.message),
            PasteOutcome::Skipped => self.info(&feedback.message),
            PasteOutcome::Failed => self.warn(&feedback.message),
        }
    }

    /// Print daemon status
    pub fn status(&self, status: &ServiceStatus) {
        let state = if status.monitoring {
            "monitoring".green()
        } else {
            "paused".yellow()
        };
        eprintln!("{} Daemon: {}", "●".cyan(), state);
        self.key_value(
            "history",
            &format!("{}/{}", status.history_len, status.max_history),
        );
        self.key_value("auto_paste", &status.auto_paste.to_string());
        self.key_value("paste_tool", &status.paste_tool);
        self.key_value("picker", if status.picker_visible { "shown" } else { "hidden" });
    }
}
