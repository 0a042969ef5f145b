//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting viewer settings (widget options,
//! last opened markup) to eframe storage as JSON strings.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Coordinates generic settings persistence.
///
/// Values are stored as JSON strings under a key. A stored value that no longer
/// deserializes (for example after an options field changed type) is treated
/// as absent.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()` when absent or invalid.
    ///
    /// # Examples
    /// ```ignore
    /// let options: GalleryOptions = SettingsCoordinator::load_setting(
    ///     storage,
    ///     "gallery_options"
    /// );
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Loads a setting, returning None when absent or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Serializes `value` and writes it under `key`.
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(
    ///     storage,
    ///     "gallery_options",
    ///     &GalleryOptions::default()
    /// );
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => warn!(key, error = %e, "Failed to serialize setting"),
        }
    }
}
