//! Profile store port — durable storage for profile records.
//!
//! The host's record storage is opaque to the core: it only has to keep
//! profile records and the active-profile pointer. Consistency between the
//! two (the pointer must resolve or be cleared) is enforced by the
//! [`ProfileRegistry`](crate::services::profile_registry::ProfileRegistry),
//! not by implementations of this trait.

use std::future::Future;

use modekit_domain::error::ModeKitError;
use modekit_domain::id::ProfileId;
use modekit_domain::profile::Profile;

/// Repository for persisting and querying [`Profile`] records.
pub trait ProfileStore {
    /// Insert or replace the record for `profile.id`.
    fn upsert(&self, profile: Profile) -> impl Future<Output = Result<(), ModeKitError>> + Send;

    /// Get a profile by its unique identifier.
    fn get(
        &self,
        id: ProfileId,
    ) -> impl Future<Output = Result<Option<Profile>, ModeKitError>> + Send;

    /// Get all stored profiles, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, ModeKitError>> + Send;

    /// Delete a profile record. Deleting an unknown id is a no-op.
    fn delete(&self, id: ProfileId) -> impl Future<Output = Result<(), ModeKitError>> + Send;

    /// Read the persisted active-profile pointer.
    fn active_profile(&self) -> impl Future<Output = Result<Option<ProfileId>, ModeKitError>> + Send;

    /// Persist the active-profile pointer (`None` clears it).
    fn set_active_profile(
        &self,
        id: Option<ProfileId>,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send;
}

impl<T: ProfileStore + Send + Sync> ProfileStore for std::sync::Arc<T> {
    fn upsert(&self, profile: Profile) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        (**self).upsert(profile)
    }

    fn get(
        &self,
        id: ProfileId,
    ) -> impl Future<Output = Result<Option<Profile>, ModeKitError>> + Send {
        (**self).get(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, ModeKitError>> + Send {
        (**self).get_all()
    }

    fn delete(&self, id: ProfileId) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        (**self).delete(id)
    }

    fn active_profile(&self) -> impl Future<Output = Result<Option<ProfileId>, ModeKitError>> + Send
    {
        (**self).active_profile()
    }

    fn set_active_profile(
        &self,
        id: Option<ProfileId>,
    ) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        (**self).set_active_profile(id)
    }
}
