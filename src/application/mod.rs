//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard history service, the events it publishes and
//! the trait definitions for external system interactions.

pub mod events;
pub mod guard;
pub mod monitor;
pub mod paste;
pub mod ports;
pub mod service;

// Re-export use cases
pub use events::{EventHub, Subscription};
pub use guard::InternalWriteGuard;
pub use monitor::{run_monitor, PollBackoff};
pub use paste::{PasteActuator, PasteFeedback, PasteOutcome};
pub use service::{ClipboardService, PollOutcome, ServiceConfig, ServiceError, ServiceStatus};
