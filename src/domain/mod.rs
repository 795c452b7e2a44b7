//! Domain layer - Core business logic
//!
//! Contains the clipboard history model, settings, configuration values
//! and domain errors. This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod settings;

// Re-export common types
pub use clipboard::{ClipboardItem, ItemKind};
pub use config::AppConfig;
pub use error::*;
pub use settings::Settings;
