//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod notifier;
pub mod paste;
pub mod picker;
pub mod storage;

// Re-export common types
pub use clipboard::{ClipboardError, SystemClipboard};
pub use config::ConfigStore;
pub use notifier::{Notification, NotificationError, NotificationIcon, Notifier};
pub use paste::{AppTarget, PasteError, PasteInjector};
pub use picker::PickerView;
pub use storage::{PersistenceStore, StorageError};
