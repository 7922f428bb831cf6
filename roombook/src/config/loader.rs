//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{Config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// A configuration file and what it contained.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::ConfigLoader;
///
/// match ConfigLoader::load_user(None).unwrap() {
///     Some(source) => println!("using {}", source.path.display()),
///     None => println!("no configuration file"),
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the user config at `{data_dir}/config.yaml`, where `data_dir`
    /// defaults to `~/.roombook`.
    ///
    /// Returns `None` when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => Self::user_config_path()?,
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        log::debug!("loaded configuration from {}", config_path.display());
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        // An empty file is an empty configuration
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    fn user_config_path() -> Result<PathBuf> {
        Ok(crate::database::default_data_dir()?.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "\n").unwrap();
        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_user_from_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "maximum_lock_wait_seconds: 9\n",
        )
        .unwrap();

        let source = ConfigLoader::load_user(Some(temp_dir.path()))
            .unwrap()
            .unwrap();
        assert_eq!(source.path, temp_dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(source.config.maximum_lock_wait_seconds, Some(9));
    }

    #[test]
    fn test_load_user_without_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigLoader::load_user(Some(temp_dir.path()))
            .unwrap()
            .is_none());
    }
}
