//! Persistence adapters

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, HISTORY_FILE, SETTINGS_FILE};
pub use memory::MemoryStore;
