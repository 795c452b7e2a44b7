//! Cross-platform paste injection using enigo
//!
//! Works on Windows, macOS, and Linux (X11). Focus tracking is not
//! available through enigo, so the frontmost app is always unknown.

use async_trait::async_trait;

use crate::application::ports::{AppTarget, PasteError, PasteInjector};

/// Press the platform paste chord (Cmd+V on macOS, Ctrl+V elsewhere).
///
/// Blocking; call from `spawn_blocking`.
pub(super) fn press_paste_chord() -> Result<(), PasteError> {
    use enigo::{Direction, Enigo, Key, Keyboard, Settings};

    #[cfg(target_os = "macos")]
    let modifier = Key::Meta;
    #[cfg(not(target_os = "macos"))]
    let modifier = Key::Control;

    let mut enigo = Enigo::new(&Settings::default()).map_err(|e| {
        let message = e.to_string();
        if message.to_lowercase().contains("permission") {
            PasteError::PermissionDenied(message)
        } else {
            PasteError::Failed(format!("Failed to create enigo: {}", message))
        }
    })?;

    let chord = enigo
        .key(modifier, Direction::Press)
        .and_then(|_| enigo.key(Key::Unicode('v'), Direction::Click));
    // Always release the modifier, even if the click failed
    let release = enigo.key(modifier, Direction::Release);

    chord
        .and(release)
        .map_err(|e| PasteError::Failed(format!("Failed to send paste keys: {}", e)))
}

/// Paste injector driving synthetic key events through enigo
pub struct EnigoPasteInjector;

impl EnigoPasteInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoPasteInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteInjector for EnigoPasteInjector {
    fn name(&self) -> &'static str {
        "enigo"
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        Ok(None)
    }

    async fn activate(&self, target: &AppTarget) -> Result<(), PasteError> {
        Err(PasteError::Unsupported(format!(
            "enigo cannot focus {}",
            target.name
        )))
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(press_paste_chord)
            .await
            .map_err(|e| PasteError::Failed(format!("Task join error: {}", e)))?
    }
}
