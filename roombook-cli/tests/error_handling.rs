//! Exit codes and error reporting.

mod common;

use common::{day, TestEnv};
use predicates::prelude::*;

#[test]
fn test_disable_autoinit_without_store() {
    let env = TestEnv::new();
    env.command()
        .args(["--disable-autoinit", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Data directory not found"));
}

#[test]
fn test_disable_autoinit_from_config() {
    let env = TestEnv::new();
    env.write_config("disable_autoinit: true\n");
    env.command().arg("list").assert().code(3);
}

#[test]
fn test_empty_room_list_is_configuration_error() {
    let env = TestEnv::new();
    env.write_config("rooms: []\n");
    env.command()
        .arg("rooms")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("no rooms configured"));
}

#[test]
fn test_malformed_config_is_configuration_error() {
    let env = TestEnv::new();
    env.write_config("rooms: [\n");
    env.command()
        .args(["reserve", "--date", &day(1), "--room", "0", "--name", "X"])
        .assert()
        .code(7);
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let env = TestEnv::new();
    env.write_config("ports:\n  min: 5000\n");
    env.command().arg("list").assert().code(7);
}

#[test]
fn test_invalid_environment_override() {
    let env = TestEnv::new();
    env.command()
        .env("ROOMBOOK_OUTPUT_FORMAT", "xml")
        .arg("list")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("ROOMBOOK_OUTPUT_FORMAT"));
}

#[test]
fn test_non_numeric_room_is_usage_error() {
    let env = TestEnv::new();
    env.command()
        .args(["reserve", "--date", &day(1), "--room", "Fuji", "--name", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
