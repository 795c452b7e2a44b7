//! User settings persisted alongside history

use serde::{Deserialize, Serialize};

/// Runtime-changeable preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_auto_paste")]
    pub auto_paste: bool,
}

fn default_auto_paste() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_paste: default_auto_paste(),
        }
    }
}
