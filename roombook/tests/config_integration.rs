//! Integration tests for configuration loading and its effect on the store.

mod common;

use std::fs;

use roombook::config::{ConfigBuilder, OutputFormat, CONFIG_FILE_NAME};
use roombook::operations::{init_database, InitOptions};
use roombook::{Error, ReservationService, RoomId};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn config_file_rooms_become_the_registry() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "rooms:\n  - id: 10\n    name: Kiku\n  - id: 11\n    name: Ume\noutput_format: json\n",
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config.output_format(), OutputFormat::Json);

    let mut service = ReservationService::open(
        common::db_config(dir.path()),
        &config.room_registry(),
        common::fixed_clock(),
    )
    .unwrap();

    assert_eq!(service.rooms().unwrap().choices(), "10: Kiku, 11: Ume");
    service
        .make_reservation(common::TOMORROW, RoomId::new(11), "Mori")
        .unwrap();
    assert!(matches!(
        service.make_reservation(common::TOMORROW, RoomId::new(0), "Mori"),
        Err(Error::UnknownRoom { .. })
    ));
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "rooms:\n  - id: 0\n    name: Fuji\nmaximum_lock_wait_seconds: 3\n",
    )
    .unwrap();

    std::env::set_var("ROOMBOOK_ROOMS", "4=Kaede");
    std::env::set_var("ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS", "8");
    let result = ConfigBuilder::new().with_data_dir(dir.path()).build();
    std::env::remove_var("ROOMBOOK_ROOMS");
    std::env::remove_var("ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS");

    let config = result.unwrap();
    assert_eq!(config.room_registry().choices(), "4: Kaede");
    assert_eq!(config.lock_wait().as_secs(), 8);
}

#[test]
#[serial]
fn malformed_config_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "rooms: [unclosed\n").unwrap();

    let err = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
#[serial]
fn empty_room_list_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "rooms: []\n").unwrap();

    let err = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::NoRoomsConfigured));
}

#[test]
#[serial]
fn init_writes_a_loadable_config() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let result = init_database(&InitOptions::new(data_dir.clone()).with_create_config(true))
        .unwrap();
    assert!(result.config_created);

    let config = ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config.room_registry().len(), 3);
}
