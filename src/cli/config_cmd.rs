//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::paste::PasteToolPreference;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS, VALID_LOG_LEVELS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "poll_interval_ms" => config.poll_interval_ms = Some(parse_positive(key, value)?),
        "paste_timeout_ms" => config.paste_timeout_ms = Some(parse_positive(key, value)?),
        "max_history" => config.max_history = Some(parse_positive(key, value)? as usize),
        "dedup_window" => config.dedup_window = Some(parse_number(key, value)? as usize),
        "guard_delay_ms" => config.guard_delay_ms = Some(parse_number(key, value)?),
        "paste_delay_ms" => config.paste_delay_ms = Some(parse_number(key, value)?),
        "paste_tool" => {
            let tool = value
                .parse::<PasteToolPreference>()
                .map_err(|e| invalid(key, e.to_string()))?;
            config.paste_tool = Some(tool.to_string());
        }
        "notify" => {
            config.notify = Some(
                parse_bool(value)
                    .map_err(|_| invalid(key, "Value must be 'true' or 'false'".to_string()))?,
            )
        }
        "log_level" => {
            let level = value.to_lowercase();
            if !VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(invalid(
                    key,
                    format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_LOG_LEVELS.join(", ")
                    ),
                ));
            }
            config.log_level = Some(level);
        }
        _ => return Err(invalid(key, "Unknown key".to_string())),
    }
    Ok(())
}

/// Current file value for `key`, formatted for display
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "poll_interval_ms" => config.poll_interval_ms.map(|v| v.to_string()),
        "max_history" => config.max_history.map(|v| v.to_string()),
        "dedup_window" => config.dedup_window.map(|v| v.to_string()),
        "guard_delay_ms" => config.guard_delay_ms.map(|v| v.to_string()),
        "paste_delay_ms" => config.paste_delay_ms.map(|v| v.to_string()),
        "paste_timeout_ms" => config.paste_timeout_ms.map(|v| v.to_string()),
        "paste_tool" => config.paste_tool.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        "log_level" => config.log_level.clone(),
        _ => None,
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message,
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid(key, format!("Expected a non-negative integer, got '{}'", value)))
}

fn parse_positive(key: &str, value: &str) -> Result<u64, ConfigError> {
    match parse_number(key, value)? {
        0 => Err(invalid(key, "Value must be greater than zero".to_string())),
        n => Ok(n),
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}
