//! In-memory [`ProfileStore`] backed by a hash map.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use modekit_app::ports::ProfileStore;
use modekit_domain::error::ModeKitError;
use modekit_domain::id::ProfileId;
use modekit_domain::profile::Profile;

/// Volatile profile-record store with an active-profile pointer.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: Mutex<HashMap<ProfileId, Profile>>,
    active: Mutex<Option<ProfileId>>,
}

impl MemoryProfileStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with records and a persisted pointer,
    /// exactly as a host would hand them over at startup. The pointer is
    /// stored as-is; resolving or repairing it is the registry's job.
    #[must_use]
    pub fn with_state(profiles: Vec<Profile>, active: Option<ProfileId>) -> Self {
        let store = Self::new();
        {
            let mut map = store.profiles.lock().expect("profiles lock poisoned");
            for profile in profiles {
                map.insert(profile.id, profile);
            }
            *store.active.lock().expect("active lock poisoned") = active;
        }
        store
    }
}

impl ProfileStore for MemoryProfileStore {
    fn upsert(&self, profile: Profile) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        self.profiles
            .lock()
            .expect("profiles lock poisoned")
            .insert(profile.id, profile);
        async { Ok(()) }
    }

    fn get(
        &self,
        id: ProfileId,
    ) -> impl Future<Output = Result<Option<Profile>, ModeKitError>> + Send {
        let result = self
            .profiles
            .lock()
            .expect("profiles lock poisoned")
            .get(&id)
            .cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, ModeKitError>> + Send {
        let result: Vec<Profile> = self
            .profiles
            .lock()
            .expect("profiles lock poisoned")
            .values()
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn delete(&self, id: ProfileId) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        self.profiles
            .lock()
            .expect("profiles lock poisoned")
            .remove(&id);
        async { Ok(()) }
    }

    fn active_profile(&self) -> impl Future<Output = Result<Option<ProfileId>, ModeKitError>> + Send {
        let active = *self.active.lock().expect("active lock poisoned");
        async move { Ok(active) }
    }

    fn set_active_profile(
        &self,
        id: Option<ProfileId>,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        *self.active.lock().expect("active lock poisoned") = id;
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile::builder().name(name).build().unwrap()
    }

    #[tokio::test]
    async fn should_upsert_and_get_profiles() {
        let store = MemoryProfileStore::new();
        let work = profile("Work");
        store.upsert(work.clone()).await.unwrap();

        let fetched = store.get(work.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Work");
        assert!(store.get(ProfileId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_replace_record_on_second_upsert() {
        let store = MemoryProfileStore::new();
        let mut work = profile("Work");
        store.upsert(work.clone()).await.unwrap();

        work.name = "Office".to_string();
        store.upsert(work.clone()).await.unwrap();

        assert_eq!(store.get(work.id).await.unwrap().unwrap().name, "Office");
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_delete_records_and_ignore_unknown_ids() {
        let store = MemoryProfileStore::new();
        let work = profile("Work");
        store.upsert(work.clone()).await.unwrap();

        store.delete(work.id).await.unwrap();
        store.delete(ProfileId::new()).await.unwrap();

        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_store_active_pointer_verbatim() {
        let store = MemoryProfileStore::new();
        assert!(store.active_profile().await.unwrap().is_none());

        let dangling = ProfileId::new();
        store.set_active_profile(Some(dangling)).await.unwrap();
        assert_eq!(store.active_profile().await.unwrap(), Some(dangling));

        store.set_active_profile(None).await.unwrap();
        assert!(store.active_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_seed_state_through_with_state() {
        let work = profile("Work");
        let store = MemoryProfileStore::with_state(vec![work.clone()], Some(work.id));

        assert_eq!(store.get_all().await.unwrap().len(), 1);
        assert_eq!(store.active_profile().await.unwrap(), Some(work.id));
    }
}
