//! JSON file persistence adapter

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::debug;

use crate::application::ports::{PersistenceStore, StorageError};
use crate::domain::clipboard::ClipboardItem;
use crate::domain::settings::Settings;

pub const HISTORY_FILE: &str = "history.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Stores history and settings as JSON documents in one directory.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write never leaves a truncated document behind.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store under the platform data directory (`~/.local/share/clipstash` on Linux)
    pub fn new() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("clipstash");
        Self { dir }
    }

    /// Create with custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        file: &str,
        what: &'static str,
    ) -> Result<Option<T>, StorageError> {
        let path = self.dir.join(file);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Read {
                    what,
                    message: e.to_string(),
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                what,
                message: format!("{}: {}", path.display(), e),
            })
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        file: &str,
        what: &'static str,
        value: &T,
    ) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            what,
            message: e.to_string(),
        };

        fs::create_dir_all(&self.dir).await.map_err(write_err)?;

        let content = serde_json::to_vec_pretty(value).map_err(|e| StorageError::Write {
            what,
            message: e.to_string(),
        })?;

        let target = self.dir.join(file);
        let temp = self.dir.join(format!(".{}.tmp", file));
        fs::write(&temp, content).await.map_err(write_err)?;
        fs::rename(&temp, &target).await.map_err(write_err)?;

        debug!(path = %target.display(), "saved {}", what);
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistenceStore for JsonFileStore {
    async fn load_history(&self) -> Result<Vec<ClipboardItem>, StorageError> {
        Ok(self
            .read_json(HISTORY_FILE, "history")
            .await?
            .unwrap_or_default())
    }

    async fn save_history(&self, items: &[ClipboardItem]) -> Result<(), StorageError> {
        self.write_json(HISTORY_FILE, "history", items).await
    }

    async fn load_settings(&self) -> Result<Settings, StorageError> {
        Ok(self
            .read_json(SETTINGS_FILE, "settings")
            .await?
            .unwrap_or_default())
    }

    async fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.write_json(SETTINGS_FILE, "settings", settings).await
    }
}
