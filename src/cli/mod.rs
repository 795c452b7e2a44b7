//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup, the IPC
//! transport and the daemon and client runners.

pub mod app;
pub mod args;
pub mod client_cmd;
pub mod config_cmd;
pub mod daemon_app;
pub mod ipc;
pub mod logging;
pub mod pid_file;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{load_default_config, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, DaemonOptions};
pub use client_cmd::handle_client_command;
pub use config_cmd::handle_config_command;
pub use daemon_app::run_daemon;
pub use logging::init_logging;
pub use presenter::Presenter;
