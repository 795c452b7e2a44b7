//! Clipstash - clipboard history manager
//!
//! This crate watches the system clipboard, keeps a bounded, de-duplicated
//! history of text, HTML and image entries, and restores any entry on demand,
//! optionally pasting it into the application that was focused before.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: History items, classification, change detection, dedup and config
//! - **Application**: The clipboard service, events and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, paste tools, JSON store, etc.)
//! - **CLI**: Argument parsing, daemon runner, IPC client/server and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
