//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces, integrating
//! with the OS clipboard, keystroke injection tools, desktop notifications
//! and the filesystem.

pub mod clipboard;
pub mod config;
pub mod notification;
pub mod paste;
pub mod picker;
pub mod storage;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard};
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier, NotifySendNotifier};
pub use paste::{create_paste_injector, PasteTool, PasteToolPreference};
pub use picker::HeadlessPicker;
pub use storage::{JsonFileStore, MemoryStore};
