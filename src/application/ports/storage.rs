//! Persistence port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::ClipboardItem;
use crate::domain::settings::Settings;

/// Persistence errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read {what}: {message}")]
    Read { what: &'static str, message: String },

    #[error("Failed to write {what}: {message}")]
    Write { what: &'static str, message: String },

    #[error("Corrupt {what}: {message}")]
    Corrupt { what: &'static str, message: String },
}

/// Port for durable history and settings
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Load the newest-first history. Missing storage yields an empty list.
    async fn load_history(&self) -> Result<Vec<ClipboardItem>, StorageError>;

    async fn save_history(&self, items: &[ClipboardItem]) -> Result<(), StorageError>;

    /// Load settings. Missing storage yields defaults.
    async fn load_settings(&self) -> Result<Settings, StorageError>;

    async fn save_settings(&self, settings: &Settings) -> Result<(), StorageError>;
}

/// Blanket implementation for boxed store types
#[async_trait]
impl PersistenceStore for Box<dyn PersistenceStore> {
    async fn load_history(&self) -> Result<Vec<ClipboardItem>, StorageError> {
        self.as_ref().load_history().await
    }

    async fn save_history(&self, items: &[ClipboardItem]) -> Result<(), StorageError> {
        self.as_ref().save_history(items).await
    }

    async fn load_settings(&self) -> Result<Settings, StorageError> {
        self.as_ref().load_settings().await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.as_ref().save_settings(settings).await
    }
}
