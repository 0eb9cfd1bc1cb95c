//! Settings port — scalar system settings (booleans, ints).
//!
//! The host environment persists these values; the core only reads and
//! writes through this interface. Calls are expected to be fast and
//! non-blocking.

use std::future::Future;

use modekit_domain::error::ModeKitError;

/// Well-known setting keys.
pub mod keys {
    /// Whether the profiles system is globally enabled. Defaults to on.
    pub const SYSTEM_PROFILES_ENABLED: &str = "system_profiles_enabled";

    // Gesture-sensitivity preferences owned by the settings dialog widget,
    // which reads and writes them through this same interface. Unused by
    // the profiles core itself.
    pub const BACK_GESTURE_SENSITIVITY: &str = "back_sensitivity";
    pub const BACK_GESTURE_HEIGHT: &str = "back_height";
    pub const BACK_GESTURE_HAPTIC: &str = "back_gesture_haptic";
    pub const HOME_HANDLE_WIDTH: &str = "home_handle_width";
}

/// Key/value persistence for scalar system settings.
pub trait SettingsStore {
    /// Read a boolean setting, falling back to `default` when unset.
    fn get_bool(
        &self,
        key: &str,
        default: bool,
    ) -> impl Future<Output = Result<bool, ModeKitError>> + Send;

    /// Write a boolean setting.
    fn put_bool(
        &self,
        key: &str,
        value: bool,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send;

    /// Read an integer setting, falling back to `default` when unset.
    fn get_int(
        &self,
        key: &str,
        default: i64,
    ) -> impl Future<Output = Result<i64, ModeKitError>> + Send;

    /// Write an integer setting.
    fn put_int(
        &self,
        key: &str,
        value: i64,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send;
}

impl<T: SettingsStore + Send + Sync> SettingsStore for std::sync::Arc<T> {
    fn get_bool(
        &self,
        key: &str,
        default: bool,
    ) -> impl Future<Output = Result<bool, ModeKitError>> + Send {
        (**self).get_bool(key, default)
    }

    fn put_bool(
        &self,
        key: &str,
        value: bool,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        (**self).put_bool(key, value)
    }

    fn get_int(
        &self,
        key: &str,
        default: i64,
    ) -> impl Future<Output = Result<i64, ModeKitError>> + Send {
        (**self).get_int(key, default)
    }

    fn put_int(
        &self,
        key: &str,
        value: i64,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        (**self).put_int(key, value)
    }
}
