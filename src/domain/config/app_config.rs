//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::clipboard::dedup::DEFAULT_DEDUP_WINDOW;
use crate::domain::clipboard::history::DEFAULT_MAX_HISTORY;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const DEFAULT_GUARD_DELAY_MS: u64 = 100;
pub const DEFAULT_PASTE_DELAY_MS: u64 = 100;
pub const DEFAULT_PASTE_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_PASTE_TOOL: &str = "auto";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub poll_interval_ms: Option<u64>,
    pub max_history: Option<usize>,
    pub dedup_window: Option<usize>,
    pub guard_delay_ms: Option<u64>,
    pub paste_delay_ms: Option<u64>,
    pub paste_timeout_ms: Option<u64>,
    pub paste_tool: Option<String>,
    pub notify: Option<bool>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            max_history: Some(DEFAULT_MAX_HISTORY),
            dedup_window: Some(DEFAULT_DEDUP_WINDOW),
            guard_delay_ms: Some(DEFAULT_GUARD_DELAY_MS),
            paste_delay_ms: Some(DEFAULT_PASTE_DELAY_MS),
            paste_timeout_ms: Some(DEFAULT_PASTE_TIMEOUT_MS),
            paste_tool: Some(DEFAULT_PASTE_TOOL.to_string()),
            notify: Some(false),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            max_history: other.max_history.or(self.max_history),
            dedup_window: other.dedup_window.or(self.dedup_window),
            guard_delay_ms: other.guard_delay_ms.or(self.guard_delay_ms),
            paste_delay_ms: other.paste_delay_ms.or(self.paste_delay_ms),
            paste_timeout_ms: other.paste_timeout_ms.or(self.paste_timeout_ms),
            paste_tool: other.paste_tool.or(self.paste_tool),
            notify: other.notify.or(self.notify),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Poll period, falling back to the default when unset or zero
    pub fn poll_interval_or_default(&self) -> Duration {
        Duration::from_millis(
            self.poll_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        )
    }

    /// History cap, falling back to the default when unset or zero
    pub fn max_history_or_default(&self) -> usize {
        self.max_history
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_HISTORY)
    }

    pub fn dedup_window_or_default(&self) -> usize {
        self.dedup_window.unwrap_or(DEFAULT_DEDUP_WINDOW)
    }

    pub fn guard_delay_or_default(&self) -> Duration {
        Duration::from_millis(self.guard_delay_ms.unwrap_or(DEFAULT_GUARD_DELAY_MS))
    }

    pub fn paste_delay_or_default(&self) -> Duration {
        Duration::from_millis(self.paste_delay_ms.unwrap_or(DEFAULT_PASTE_DELAY_MS))
    }

    pub fn paste_timeout_or_default(&self) -> Duration {
        Duration::from_millis(
            self.paste_timeout_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_PASTE_TIMEOUT_MS),
        )
    }

    /// Get paste tool preference, or "auto" if not set
    pub fn paste_tool_or_default(&self) -> &str {
        self.paste_tool.as_deref().unwrap_or(DEFAULT_PASTE_TOOL)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.poll_interval_ms, Some(500));
        assert_eq!(config.max_history, Some(100));
        assert_eq!(config.dedup_window, Some(3));
        assert_eq!(config.guard_delay_ms, Some(100));
        assert_eq!(config.paste_delay_ms, Some(100));
        assert_eq!(config.paste_timeout_ms, Some(2000));
        assert_eq!(config.paste_tool_or_default(), "auto");
        assert_eq!(config.notify, Some(false));
        assert_eq!(config.log_level_or_default(), "info");
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.poll_interval_ms.is_none());
        assert!(config.max_history.is_none());
        assert!(config.paste_tool.is_none());
        assert!(config.notify.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            poll_interval_ms: Some(500),
            max_history: Some(100),
            paste_tool: Some("auto".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            poll_interval_ms: Some(250),
            max_history: None, // Should not override
            paste_tool: Some("xdotool".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.poll_interval_ms, Some(250));
        assert_eq!(merged.max_history, Some(100)); // Kept from base
        assert_eq!(merged.paste_tool_or_default(), "xdotool");
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            notify: Some(true),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert!(merged.notify_or_default());
        assert_eq!(merged.log_level_or_default(), "debug");
    }

    #[test]
    fn durations_fall_back_on_none() {
        let config = AppConfig::empty();
        assert_eq!(config.poll_interval_or_default(), Duration::from_millis(500));
        assert_eq!(config.guard_delay_or_default(), Duration::from_millis(100));
        assert_eq!(config.paste_delay_or_default(), Duration::from_millis(100));
        assert_eq!(config.paste_timeout_or_default(), Duration::from_secs(2));
    }

    #[test]
    fn zero_poll_interval_uses_default() {
        let config = AppConfig {
            poll_interval_ms: Some(0),
            max_history: Some(0),
            ..Default::default()
        };
        assert_eq!(config.poll_interval_or_default(), Duration::from_millis(500));
        assert_eq!(config.max_history_or_default(), 100);
    }

    #[test]
    fn zero_guard_delay_is_kept() {
        let config = AppConfig {
            guard_delay_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(config.guard_delay_or_default(), Duration::ZERO);
    }

    #[test]
    fn parses_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            poll_interval_ms = 750
            paste_tool = "wtype"
            notify = true
            "#,
        )
        .unwrap();
        assert_eq!(config.poll_interval_or_default(), Duration::from_millis(750));
        assert_eq!(config.paste_tool_or_default(), "wtype");
        assert!(config.notify_or_default());
        assert_eq!(config.max_history_or_default(), 100);
    }
}
