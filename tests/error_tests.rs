//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clipstash_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clipstash").expect("binary is built");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("XDG_RUNTIME_DIR", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_bool() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["config", "set", "notify", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("true"));
}

#[test]
fn config_set_zero_poll_interval() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["config", "set", "poll_interval_ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn config_set_unknown_paste_tool() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["config", "set", "paste_tool", "telepathy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid options"));
}

#[test]
#[cfg(unix)]
fn list_without_daemon() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Daemon is not running"));
}

#[test]
#[cfg(unix)]
fn copy_without_daemon() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["copy", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Daemon is not running"));
}

#[test]
fn non_numeric_id_is_rejected() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["delete", "latest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn daemon_flags_require_daemon() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["--poll-interval", "100", "list"])
        .assert()
        .failure();
}

#[test]
#[cfg(target_os = "linux")]
fn broken_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("config").join("clipstash");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "max_history = [").unwrap();

    clipstash_bin(&home)
        .args(["--version"])
        .assert()
        .success();

    clipstash_bin(&home)
        .args(["config", "get", "max_history"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ignoring config file"));
}
