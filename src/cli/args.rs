//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

/// Clipstash - clipboard history with restore and auto-paste
#[derive(Parser, Debug)]
#[command(name = "clipstash")]
#[command(version)]
#[command(about = "Clipboard history daemon with restore and auto-paste")]
#[command(long_about = None)]
pub struct Cli {
    /// Run the clipboard monitor daemon
    #[arg(long)]
    pub daemon: bool,

    /// Poll period in milliseconds (daemon)
    #[arg(long, value_name = "MS", requires = "daemon")]
    pub poll_interval: Option<u64>,

    /// Paste tool (auto, enigo, none; Linux also xdotool, wtype, ydotool)
    #[arg(long, value_name = "TOOL", requires = "daemon")]
    pub paste_tool: Option<String>,

    /// Show desktop notifications when an auto-paste fails or is skipped
    #[arg(short = 'n', long, requires = "daemon")]
    pub notify: bool,

    /// Keep history in memory only (daemon)
    #[arg(long, requires = "daemon")]
    pub ephemeral: bool,

    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", env = "CLIPSTASH_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print the clipboard history, newest first
    List {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Restore a history item to the clipboard
    Copy {
        /// Item id as shown by `list`
        id: u64,
    },
    /// Delete a history item
    Delete {
        /// Item id as shown by `list`
        id: u64,
    },
    /// Delete all history
    Clear,
    /// Show the picker, remembering the focused application
    Show,
    /// Hide the picker
    Hide,
    /// Get or set the auto-paste setting
    AutoPaste {
        /// New value; omit to print the current one
        state: Option<Toggle>,
    },
    /// Suspend clipboard monitoring
    Pause,
    /// Resume clipboard monitoring
    Resume,
    /// Show daemon status
    Status,
    /// Stream history updates and paste feedback until interrupted
    Watch,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// On/off argument for boolean settings
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

/// Parsed daemon options
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    pub poll_interval_ms: Option<u64>,
    pub paste_tool: Option<String>,
    pub notify: bool,
    pub ephemeral: bool,
}

impl From<&Cli> for DaemonOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            poll_interval_ms: cli.poll_interval,
            paste_tool: cli.paste_tool.clone(),
            notify: cli.notify,
            ephemeral: cli.ephemeral,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "poll_interval_ms",
    "max_history",
    "dedup_window",
    "guard_delay_ms",
    "paste_delay_ms",
    "paste_timeout_ms",
    "paste_tool",
    "notify",
    "log_level",
];

/// Accepted `log_level` values
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["clipstash"]);
        assert!(!cli.daemon);
        assert!(cli.poll_interval.is_none());
        assert!(cli.paste_tool.is_none());
        assert!(!cli.notify);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_daemon_options() {
        let cli = Cli::parse_from([
            "clipstash",
            "--daemon",
            "--poll-interval",
            "250",
            "--paste-tool",
            "xdotool",
            "-n",
        ]);
        let options = DaemonOptions::from(&cli);
        assert!(cli.daemon);
        assert_eq!(options.poll_interval_ms, Some(250));
        assert_eq!(options.paste_tool, Some("xdotool".to_string()));
        assert!(options.notify);
        assert!(!options.ephemeral);
    }

    #[test]
    fn daemon_options_require_daemon() {
        assert!(Cli::try_parse_from(["clipstash", "--poll-interval", "100"]).is_err());
    }

    #[test]
    fn cli_parses_list_json() {
        let cli = Cli::parse_from(["clipstash", "list", "--json"]);
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn cli_parses_copy_id() {
        let cli = Cli::parse_from(["clipstash", "copy", "1700000000000"]);
        assert!(matches!(cli.command, Some(Commands::Copy { id: 1700000000000 })));
    }

    #[test]
    fn cli_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["clipstash", "delete", "abc"]).is_err());
    }

    #[test]
    fn cli_parses_auto_paste() {
        let cli = Cli::parse_from(["clipstash", "auto-paste", "off"]);
        assert!(matches!(
            cli.command,
            Some(Commands::AutoPaste {
                state: Some(Toggle::Off)
            })
        ));
        let cli = Cli::parse_from(["clipstash", "auto-paste"]);
        assert!(matches!(cli.command, Some(Commands::AutoPaste { state: None })));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["clipstash", "config", "set", "max_history", "50"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "max_history");
            assert_eq!(value, "50");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn toggle_converts_to_bool() {
        assert!(bool::from(Toggle::On));
        assert!(!bool::from(Toggle::Off));
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("poll_interval_ms"));
        assert!(is_valid_config_key("paste_tool"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
