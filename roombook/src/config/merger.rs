//! Configuration layering.

use crate::config::schema::Config;

/// Lays a higher-precedence configuration over a lower one.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigMerger};
///
/// let low = Config { maximum_lock_wait_seconds: Some(5), ..Default::default() };
/// let high = Config { maximum_lock_wait_seconds: Some(10), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.maximum_lock_wait_seconds, Some(10));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced when the source sets it. Room lists are
    /// replaced as a whole, never combined.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.rooms.is_some() {
            target.rooms.clone_from(&source.rooms);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
