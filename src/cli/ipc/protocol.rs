//! Line-delimited JSON protocol between the CLI and the daemon
//!
//! Every request and response is one JSON object on its own line.

use serde::{Deserialize, Serialize};

use crate::application::{PasteFeedback, ServiceStatus};
use crate::domain::clipboard::ClipboardItem;

/// Client request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum Request {
    GetHistory,
    Copy { id: u64 },
    Delete { id: u64 },
    Clear,
    ShowPicker,
    HidePicker,
    GetAutoPaste,
    SetAutoPaste { enabled: bool },
    Pause,
    Resume,
    Status,
    /// Stream history snapshots and paste feedback until the client leaves
    Watch,
}

/// Daemon response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Response {
    History { items: Vec<ClipboardItem> },
    Ok,
    AutoPaste { enabled: bool },
    Status(ServiceStatus),
    PasteFeedback(PasteFeedback),
    Error { message: String },
}

impl Response {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Encode a message as a single protocol line (including the newline)
pub fn encode_line<T: Serialize>(message: &T) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}
