//! In-memory persistence adapter

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{PersistenceStore, StorageError};
use crate::domain::clipboard::ClipboardItem;
use crate::domain::settings::Settings;

/// Keeps history and settings for the life of the process only
#[derive(Debug, Default)]
pub struct MemoryStore {
    history: Mutex<Vec<ClipboardItem>>,
    settings: Mutex<Settings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceStore for MemoryStore {
    async fn load_history(&self) -> Result<Vec<ClipboardItem>, StorageError> {
        Ok(self.history.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn save_history(&self, items: &[ClipboardItem]) -> Result<(), StorageError> {
        *self.history.lock().unwrap_or_else(|e| e.into_inner()) = items.to_vec();
        Ok(())
    }

    async fn load_settings(&self) -> Result<Settings, StorageError> {
        Ok(*self.settings.lock().unwrap_or_else(|e| e.into_inner()))
    }

    async fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        *self.settings.lock().unwrap_or_else(|e| e.into_inner()) = *settings;
        Ok(())
    }
}
