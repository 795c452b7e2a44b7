//! Clipboard history domain

pub mod classifier;
pub mod content;
pub mod dedup;
pub mod detector;
pub mod history;
pub mod id;
pub mod item;

pub use classifier::{classify, is_real_html, Classification};
pub use content::{ClipboardSnapshot, ClipboardWrite, RawImage};
pub use dedup::DedupPolicy;
pub use detector::ChangeDetector;
pub use history::History;
pub use id::IdGenerator;
pub use item::{ClipboardItem, ItemKind};
