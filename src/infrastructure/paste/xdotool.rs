//! Xdotool paste adapter for X11

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{AppTarget, PasteError, PasteInjector};

use super::command::run_tool;

/// X11 focus tracking and paste via xdotool.
///
/// Targets are identified by X window id; the class name is the display name.
pub struct XdotoolPasteInjector {
    timeout: Duration,
}

impl XdotoolPasteInjector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl PasteInjector for XdotoolPasteInjector {
    fn name(&self) -> &'static str {
        "xdotool"
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        let window = run_tool("xdotool", &["getactivewindow"], self.timeout).await?;
        if window.is_empty() {
            return Ok(None);
        }

        let name = match run_tool("xdotool", &["getwindowclassname", &window], self.timeout).await {
            Ok(class) if !class.is_empty() => class,
            _ => run_tool("xdotool", &["getwindowname", &window], self.timeout).await?,
        };

        Ok(Some(AppTarget::new(window, name)))
    }

    async fn activate(&self, target: &AppTarget) -> Result<(), PasteError> {
        run_tool(
            "xdotool",
            &["windowactivate", "--sync", &target.id],
            self.timeout,
        )
        .await
        .map(|_| ())
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        run_tool(
            "xdotool",
            &["key", "--clearmodifiers", "ctrl+v"],
            self.timeout,
        )
        .await
        .map(|_| ())
    }
}
