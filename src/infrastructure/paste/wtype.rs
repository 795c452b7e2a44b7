//! Wtype paste adapter for Wayland

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{AppTarget, PasteError, PasteInjector};

use super::command::run_tool;

/// Wayland-native paste via wtype's virtual keyboard.
///
/// Wayland does not expose the focused client, so focus is never tracked
/// and the paste lands wherever the compositor has placed focus.
pub struct WtypePasteInjector {
    timeout: Duration,
}

impl WtypePasteInjector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl PasteInjector for WtypePasteInjector {
    fn name(&self) -> &'static str {
        "wtype"
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        Ok(None)
    }

    async fn activate(&self, _target: &AppTarget) -> Result<(), PasteError> {
        Err(PasteError::Unsupported(
            "wayland clients cannot be focused by wtype".to_string(),
        ))
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        run_tool("wtype", &["-M", "ctrl", "-k", "v", "-m", "ctrl"], self.timeout)
            .await
            .map(|_| ())
    }
}
