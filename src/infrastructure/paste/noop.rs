//! No-op paste adapter

use async_trait::async_trait;

use crate::application::ports::{AppTarget, PasteError, PasteInjector};

/// Paste injector used when injection is turned off.
///
/// Restores still reach the clipboard; the paste itself is reported as
/// unsupported.
pub struct NoOpPasteInjector;

impl NoOpPasteInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpPasteInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteInjector for NoOpPasteInjector {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        Ok(None)
    }

    async fn activate(&self, _target: &AppTarget) -> Result<(), PasteError> {
        Ok(())
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        Err(PasteError::Unsupported(
            "paste_tool is set to none".to_string(),
        ))
    }
}
