//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with config, data and runtime dirs pointed into `home`
fn clipstash_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clipstash").expect("binary is built");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("XDG_RUNTIME_DIR", home.path())
        .env_remove("RUST_LOG")
        .env_remove("CLIPSTASH_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clipboard history"))
        .stdout(predicate::str::contains("--daemon"))
        .stdout(predicate::str::contains("--paste-tool"))
        .stdout(predicate::str::contains("auto-paste"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipstash"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
#[cfg(target_os = "linux")]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config").join("clipstash").join("config.toml");
    clipstash_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
#[cfg(unix)]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["config", "set", "max_history", "25"])
        .assert()
        .success();

    clipstash_bin(&home)
        .args(["config", "get", "max_history"])
        .assert()
        .success()
        .stdout(predicate::str::diff("25\n"));
}

#[test]
#[cfg(unix)]
fn config_list_shows_every_key() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .args(["config", "init"])
        .assert()
        .success();

    clipstash_bin(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("poll_interval_ms"))
        .stdout(predicate::str::contains("paste_tool"))
        .stdout(predicate::str::contains("auto"));
}

#[test]
#[cfg(unix)]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home).args(["config", "init"]).assert().success();
    clipstash_bin(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn no_arguments_is_usage_error() {
    let home = TempDir::new().unwrap();
    clipstash_bin(&home)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--daemon"));
}
