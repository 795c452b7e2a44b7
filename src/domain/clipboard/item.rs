//! Clipboard history item entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a preview
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Fixed preview label for image items
pub const IMAGE_PREVIEW_LABEL: &str = "[Image]";

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Kind of content stored in a history item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Text,
    Image,
    Html,
}

impl ItemKind {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing an item kind
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid item kind: \"{input}\". Valid kinds are: text, image, html")]
pub struct ParseItemKindError {
    pub input: String,
}

impl FromStr for ItemKind {
    type Err = ParseItemKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "html" => Ok(Self::Html),
            _ => Err(ParseItemKindError {
                input: s.to_string(),
            }),
        }
    }
}

/// A single recorded clipboard entry.
///
/// Items are immutable once created. `content` + `kind` is the identity used
/// for duplicate suppression; `id`, `timestamp` and `preview` never take part
/// in equality checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    id: u64,
    content: String,
    #[serde(rename = "type")]
    kind: ItemKind,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preview: Option<String>,
}

impl ClipboardItem {
    /// Create a new item stamped with the current time
    pub fn new(id: u64, kind: ItemKind, content: impl Into<String>) -> Self {
        Self::with_timestamp(id, kind, content, Utc::now())
    }

    /// Create a new item with an explicit timestamp
    pub fn with_timestamp(
        id: u64,
        kind: ItemKind,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        let preview = Some(build_preview(kind, &content));
        Self {
            id,
            content,
            kind,
            timestamp,
            preview,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Display summary, rebuilt from content if it was not persisted
    pub fn preview(&self) -> String {
        self.preview
            .clone()
            .unwrap_or_else(|| build_preview(self.kind, &self.content))
    }

    /// Check whether this item carries the same payload as a candidate
    pub fn same_payload(&self, kind: ItemKind, content: &str) -> bool {
        self.kind == kind && self.content == content
    }
}

/// Build the display preview for a payload
pub fn build_preview(kind: ItemKind, content: &str) -> String {
    match kind {
        ItemKind::Image => IMAGE_PREVIEW_LABEL.to_string(),
        ItemKind::Html => truncate(&collapse_whitespace(&strip_tags(content))),
        ItemKind::Text => truncate(&collapse_whitespace(content)),
    }
}

/// Remove markup tags and decode the handful of entities browsers emit most
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN
        .replace_all(html, " ")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(s: &str) -> String {
    match s.char_indices().nth(PREVIEW_MAX_CHARS) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}
