//! Configuration system for roombook.
//!
//! Configuration is merged from the following sources (highest precedence
//! first):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOMBOOK_*`)
//! 3. User config (`~/.roombook/config.yaml`, or `config.yaml` in the data directory)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use roombook::config::{Config, ConfigBuilder, RoomConfig};
//!
//! let custom = Config {
//!     rooms: Some(vec![
//!         RoomConfig { id: 0, name: "Fuji".into() },
//!         RoomConfig { id: 1, name: "Sakura".into() },
//!     ]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.room_registry().len(), 2);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, RoomConfig, CONFIG_FILE_NAME, DEFAULT_LOCK_WAIT_SECONDS};
pub use validator::ConfigValidator;
