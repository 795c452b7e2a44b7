//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::{ClipboardSnapshot, ClipboardWrite};

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Port for the operating-system clipboard
#[async_trait]
pub trait SystemClipboard: Send + Sync {
    /// Sample every supported representation currently on the clipboard.
    ///
    /// Missing representations are `None`, not errors.
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError>;

    /// Replace the clipboard contents.
    async fn write(&self, content: &ClipboardWrite) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl SystemClipboard for Box<dyn SystemClipboard> {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.as_ref().read().await
    }

    async fn write(&self, content: &ClipboardWrite) -> Result<(), ClipboardError> {
        self.as_ref().write(content).await
    }
}
