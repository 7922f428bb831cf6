//! Logging backend for the roombook binaries.
//!
//! Library code reports through the `log` facade only. [`Logger`] is the
//! stderr sink the CLI installs; its verbosity follows `--verbose`,
//! `--quiet` or `ROOMBOOK_LOG_MODE`.

use std::env;
use std::str::FromStr;

/// Environment variable selecting the log level.
pub const LOG_MODE_ENV: &str = "ROOMBOOK_LOG_MODE";

/// How much diagnostic output reaches stderr.
///
/// ```
/// use roombook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Verbose);
/// assert_eq!("Verbose".parse::<LogLevel>(), Ok(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug records, tagged with their module.
    Verbose,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(format!(
                "unknown log mode '{other}': expected quiet, normal or verbose"
            )),
        }
    }
}

impl LogLevel {
    /// The most detailed `log` level shown at this verbosity.
    #[must_use]
    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Error,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// Stderr sink for `log` records.
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The verbosity this logger was created with.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Registers this logger as the `log` backend for the process.
    ///
    /// # Errors
    ///
    /// Returns an error if a logger has already been installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn format(&self, record: &log::Record<'_>) -> String {
        let level = record.level().as_str().to_ascii_lowercase();
        if self.level == LogLevel::Verbose {
            format!("{level} [{}]: {}", record.target(), record.args())
        } else {
            format!("{level}: {}", record.args())
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

/// Picks the verbosity from the CLI flags, then `ROOMBOOK_LOG_MODE`.
///
/// `verbose` wins over `quiet`. An unreadable `ROOMBOOK_LOG_MODE` falls back
/// to [`LogLevel::Normal`].
///
/// ```
/// use roombook::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}
