//! Shared app plumbing: exit codes and configuration loading

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::XdgConfigStore;

use super::args::Cli;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Config values given on the command line
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        poll_interval_ms: cli.poll_interval,
        paste_tool: cli.paste_tool.clone(),
        notify: cli.notify.then_some(true),
        log_level: cli.log_level.clone(),
        ..AppConfig::empty()
    }
}

/// Load and merge configuration: defaults < file < cli.
///
/// An unreadable config file is reported through `on_error` and skipped.
pub async fn load_merged_config<S, F>(store: &S, cli_config: AppConfig, on_error: F) -> AppConfig
where
    S: ConfigStore,
    F: FnOnce(String),
{
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            on_error(format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Config loaded from the default XDG location
pub async fn load_default_config(cli: &Cli, on_error: impl FnOnce(String)) -> AppConfig {
    load_merged_config(&XdgConfigStore::new(), cli_config(cli), on_error).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_flags_become_config() {
        let cli = Cli::parse_from(["clipstash", "--daemon", "--poll-interval", "50", "-n"]);
        let config = cli_config(&cli);
        assert_eq!(config.poll_interval_ms, Some(50));
        assert_eq!(config.notify, Some(true));
        assert_eq!(config.max_history, None);
    }

    #[test]
    fn absent_notify_flag_does_not_override_file() {
        let cli = Cli::parse_from(["clipstash", "--daemon"]);
        assert_eq!(cli_config(&cli).notify, None);
    }

    #[tokio::test]
    async fn merge_order_is_defaults_file_cli() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        store
            .save(&AppConfig {
                poll_interval_ms: Some(900),
                max_history: Some(20),
                ..AppConfig::empty()
            })
            .await
            .unwrap();

        let cli = AppConfig {
            poll_interval_ms: Some(50),
            ..AppConfig::empty()
        };
        let merged = load_merged_config(&store, cli, |_| panic!("config is valid")).await;

        assert_eq!(merged.poll_interval_ms, Some(50));
        assert_eq!(merged.max_history, Some(20));
        assert_eq!(merged.dedup_window, Some(3));
    }

    #[tokio::test]
    async fn broken_file_is_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_history = \"lots\"").unwrap();
        let store = XdgConfigStore::with_path(path);

        let mut reported = None;
        let merged =
            load_merged_config(&store, AppConfig::empty(), |msg| reported = Some(msg)).await;

        assert!(reported.unwrap().starts_with("Ignoring config file"));
        assert_eq!(merged, AppConfig::defaults());
    }
}
