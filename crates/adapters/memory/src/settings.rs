//! In-memory [`SettingsStore`] backed by hash maps.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use modekit_app::ports::SettingsStore;
use modekit_domain::error::ModeKitError;

/// Volatile settings store; unset keys resolve to the caller's default.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    bools: Mutex<HashMap<String, bool>>,
    ints: Mutex<HashMap<String, i64>>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(
        &self,
        key: &str,
        default: bool,
    ) -> impl Future<Output = Result<bool, ModeKitError>> + Send {
        let value = *self
            .bools
            .lock()
            .expect("settings lock poisoned")
            .get(key)
            .unwrap_or(&default);
        async move { Ok(value) }
    }

    fn put_bool(
        &self,
        key: &str,
        value: bool,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        self.bools
            .lock()
            .expect("settings lock poisoned")
            .insert(key.to_string(), value);
        async { Ok(()) }
    }

    fn get_int(
        &self,
        key: &str,
        default: i64,
    ) -> impl Future<Output = Result<i64, ModeKitError>> + Send {
        let value = *self
            .ints
            .lock()
            .expect("settings lock poisoned")
            .get(key)
            .unwrap_or(&default);
        async move { Ok(value) }
    }

    fn put_int(
        &self,
        key: &str,
        value: i64,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        self.ints
            .lock()
            .expect("settings lock poisoned")
            .insert(key.to_string(), value);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_default_for_unset_keys() {
        let store = MemorySettingsStore::new();
        assert!(store.get_bool("missing", true).await.unwrap());
        assert_eq!(store.get_int("missing", 7).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn should_return_stored_values_over_defaults() {
        let store = MemorySettingsStore::new();
        store.put_bool("flag", false).await.unwrap();
        store.put_int("level", 3).await.unwrap();

        assert!(!store.get_bool("flag", true).await.unwrap());
        assert_eq!(store.get_int("level", 0).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn should_overwrite_existing_values() {
        let store = MemorySettingsStore::new();
        store.put_int("level", 1).await.unwrap();
        store.put_int("level", 2).await.unwrap();

        assert_eq!(store.get_int("level", 0).await.unwrap(), 2);
    }
}
