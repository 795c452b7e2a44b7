//! Paste injection port interface

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Applications that own the desktop rather than a text field
const DESKTOP_SHELLS: &[&str] = &[
    "finder",
    "explorer",
    "explorer.exe",
    "nautilus",
    "org.gnome.nautilus",
    "dolphin",
    "nemo",
    "caja",
    "thunar",
    "pcmanfm",
    "xfdesktop",
    "plasmashell",
    "desktop",
];

/// Paste injection errors
#[derive(Debug, Clone, Error)]
pub enum PasteError {
    #[error("{0} not found. Please install {0}.")]
    ToolNotFound(&'static str),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Paste injection is not supported: {0}")]
    Unsupported(String),

    #[error("{0} timed out")]
    Timeout(String),

    #[error("Paste failed: {0}")]
    Failed(String),
}

/// An application that can receive a paste
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTarget {
    /// Platform handle used to reactivate the app (bundle name, window id, hwnd)
    pub id: String,
    /// Human-readable application or process name
    pub name: String,
}

impl AppTarget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Whether the app is a file manager or desktop shell
    pub fn is_desktop_shell(&self) -> bool {
        let name = self.name.trim().to_lowercase();
        let base = name.rsplit(['/', '\\']).next().unwrap_or(&name);
        DESKTOP_SHELLS.contains(&base)
    }
}

impl fmt::Display for AppTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Port for focus tracking and paste keystroke injection
#[async_trait]
pub trait PasteInjector: Send + Sync {
    /// Short tool name for logs
    fn name(&self) -> &'static str;

    /// The application that currently has focus, if it can be determined
    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError>;

    /// Bring a previously recorded application back to the front
    async fn activate(&self, target: &AppTarget) -> Result<(), PasteError>;

    /// Send the platform paste shortcut to the focused application
    async fn send_paste(&self) -> Result<(), PasteError>;
}

/// Blanket implementation for boxed injector types
#[async_trait]
impl PasteInjector for Box<dyn PasteInjector> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    async fn frontmost_app(&self) -> Result<Option<AppTarget>, PasteError> {
        self.as_ref().frontmost_app().await
    }

    async fn activate(&self, target: &AppTarget) -> Result<(), PasteError> {
        self.as_ref().activate(target).await
    }

    async fn send_paste(&self) -> Result<(), PasteError> {
        self.as_ref().send_paste().await
    }
}
