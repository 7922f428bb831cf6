//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use chrono::{Duration, Local};
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const ISOLATED_VARS: [&str; 7] = [
    "ROOMBOOK_DATA_DIR",
    "ROOMBOOK_BUSY_TIMEOUT",
    "ROOMBOOK_DISABLE_AUTOINIT",
    "ROOMBOOK_ROOMS",
    "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "ROOMBOOK_OUTPUT_FORMAT",
    "ROOMBOOK_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the roombook data directory (created on first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("roombook-data");
        Self { temp_dir, data_dir }
    }

    /// Command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Reserve a room, asserting success.
    pub fn reserve(&self, date: &str, room: u32, name: &str) {
        self.command()
            .args(["reserve", "--date", date, "--room", &room.to_string(), "--name", name])
            .assert()
            .success();
    }

    /// Run `list` and return stdout.
    pub fn list(&self) -> String {
        let output = self.command().arg("list").output().expect("list failed");
        assert!(output.status.success());
        String::from_utf8(output.stdout).expect("stdout is UTF-8")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }
}

/// A date `days` away from today, as YYYYMMDD.
#[allow(dead_code)]
pub fn day(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y%m%d")
        .to_string()
}

/// A date `days` away from today, as YYYY-MM-DD.
#[allow(dead_code)]
pub fn iso_day(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
