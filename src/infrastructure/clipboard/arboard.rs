//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::trace;

use crate::application::ports::{ClipboardError, SystemClipboard};
use crate::domain::clipboard::{ClipboardSnapshot, ClipboardWrite, RawImage};

/// Cross-platform clipboard adapter using arboard.
///
/// The arboard handle is opened lazily and kept for the life of the adapter;
/// on X11 and Wayland the handle owns the selection, so dropping it after a
/// write would discard what was just copied.
#[derive(Clone, Default)]
pub struct ArboardClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `op` against the shared handle on the blocking pool
    async fn with_handle<T, F>(&self, op: F) -> Result<T, ClipboardError>
    where
        T: Send + 'static,
        F: FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError> + Send + 'static,
    {
        let handle = Arc::clone(&self.handle);

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut slot = handle.lock().unwrap_or_else(|e| e.into_inner());
            if slot.is_none() {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;
                *slot = Some(clipboard);
            }
            let clipboard = slot
                .as_mut()
                .ok_or_else(|| ClipboardError::ClipboardUnavailable("no handle".to_string()))?;

            let result = op(clipboard);
            if matches!(result, Err(ClipboardError::ClipboardUnavailable(_))) {
                // Reconnect on the next call
                *slot = None;
            }
            result
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }
}

/// Treat "nothing of this format" as absent rather than an error
fn optional<T>(result: Result<T, arboard::Error>) -> Result<Option<T>, ClipboardError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(arboard::Error::ContentNotAvailable) | Err(arboard::Error::ConversionFailure) => {
            Ok(None)
        }
        Err(arboard::Error::ClipboardNotSupported) => Err(ClipboardError::ClipboardUnavailable(
            "clipboard not supported".to_string(),
        )),
        Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
    }
}

fn read_snapshot(clipboard: &mut arboard::Clipboard) -> Result<ClipboardSnapshot, ClipboardError> {
    let text = optional(clipboard.get_text())?;
    let html = optional(clipboard.get().html())?;
    let image = optional(clipboard.get_image())?
        .map(|img| RawImage::new(img.width, img.height, img.bytes.into_owned()))
        .transpose()
        .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;

    trace!(
        text = text.is_some(),
        html = html.is_some(),
        image = image.is_some(),
        "sampled clipboard"
    );
    Ok(ClipboardSnapshot { text, html, image })
}

fn write_content(
    clipboard: &mut arboard::Clipboard,
    content: ClipboardWrite,
) -> Result<(), ClipboardError> {
    let result = match content {
        ClipboardWrite::Text(text) => clipboard.set_text(text),
        ClipboardWrite::Html { html, alt_text } => clipboard.set_html(html, Some(alt_text)),
        ClipboardWrite::Image(image) => clipboard.set_image(arboard::ImageData {
            width: image.width,
            height: image.height,
            bytes: image.bytes.into(),
        }),
    };
    result.map_err(|e| match e {
        arboard::Error::ClipboardNotSupported | arboard::Error::ClipboardOccupied => {
            ClipboardError::ClipboardUnavailable(e.to_string())
        }
        other => ClipboardError::WriteFailed(other.to_string()),
    })
}

#[async_trait]
impl SystemClipboard for ArboardClipboard {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.with_handle(read_snapshot).await
    }

    async fn write(&self, content: &ClipboardWrite) -> Result<(), ClipboardError> {
        let content = content.clone();
        self.with_handle(move |clipboard| write_content(clipboard, content))
            .await
    }
}
