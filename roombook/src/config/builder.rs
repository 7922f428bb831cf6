//! Builder that layers configuration sources into a validated [`Config`].

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Sources are applied lowest precedence first: built-in defaults, the
/// config file in the data directory, `ROOMBOOK_*` environment variables,
/// then any programmatic overrides.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the config file from `data_dir` instead of `~/.roombook`.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed, or if the
    /// merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user(self.data_dir.as_deref())? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::LOCK_WAIT_ENV;
    use crate::config::schema::{OutputFormat, CONFIG_FILE_NAME};
    use crate::error::Error;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_build_precedence() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "maximum_lock_wait_seconds: 3\noutput_format: csv\n",
        )
        .unwrap();

        std::env::set_var(LOCK_WAIT_ENV, "7");
        let result = ConfigBuilder::new()
            .with_data_dir(temp_dir.path())
            .with_config(Config {
                output_format: Some(OutputFormat::Json),
                ..Default::default()
            })
            .build();
        std::env::remove_var(LOCK_WAIT_ENV);

        let config = result.unwrap();
        assert_eq!(config.maximum_lock_wait_seconds, Some(7));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_build_rejects_invalid() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                rooms: Some(vec![]),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::NoRoomsConfigured)));
    }
}
