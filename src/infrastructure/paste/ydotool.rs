//! Ydotool paste adapter for Wayland support

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{AppTarget, PasteError, PasteInjector};

use super::command::run_tool;

/// Linux input-event codes for the paste chord
const KEY_LEFTCTRL: u16 = 29;
const KEY_V: u16 = 47;

/// Ydotool paste adapter.
///
/// Requires ydotoold daemon to be running and user to be in the input group.
pub struct YdotoolPasteInjector {
    timeout: Duration,
}

impl YdotoolPasteInjector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl PasteInjector for YdotoolPasteInjector {
    fn name(&self) -> &'static str {
        "ydotool"
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        Ok(None)
    }

    async fn activate(&self, _target: &AppTarget) -> Result<(), PasteError> {
        Err(PasteError::Unsupported(
            "ydotool cannot focus windows".to_string(),
        ))
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        let press_ctrl = format!("{}:1", KEY_LEFTCTRL);
        let press_v = format!("{}:1", KEY_V);
        let release_v = format!("{}:0", KEY_V);
        let release_ctrl = format!("{}:0", KEY_LEFTCTRL);

        run_tool(
            "ydotool",
            &["key", &press_ctrl, &press_v, &release_v, &release_ctrl],
            self.timeout,
        )
        .await
        .map(|_| ())
    }
}
