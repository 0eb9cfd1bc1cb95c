//! Profile registry — profile CRUD, the single-active-profile invariant,
//! and the system-wide enabled flag.
//!
//! All mutating operations serialize on an internal async mutex (the
//! single-writer discipline): a mutation either completes fully or fails
//! before touching anything, and no caller observes a partially-applied
//! write. Reads never take the write lock.
//!
//! The active profile is tracked as a plain id looked up in the record
//! store, never as an owning handle, so removing the referenced profile
//! independently is always safe.

use modekit_domain::error::{ModeKitError, NotFoundError};
use modekit_domain::event::ProfileEvent;
use modekit_domain::id::ProfileId;
use modekit_domain::profile::{Profile, SettingValue};

use crate::ports::settings::keys;
use crate::ports::{EventPublisher, ProfileStore, SettingsStore};

/// Name of the profile restored by [`ProfileRegistry::reset_all`].
pub const DEFAULT_PROFILE_NAME: &str = "Default";

/// Application service owning the profile set and the active pointer.
pub struct ProfileRegistry<R, S, P> {
    store: R,
    settings: S,
    publisher: P,
    write_lock: tokio::sync::Mutex<()>,
}

impl<R, S, P> ProfileRegistry<R, S, P>
where
    R: ProfileStore,
    S: SettingsStore,
    P: EventPublisher,
{
    /// Construct a registry over previously persisted state, repairing a
    /// dangling active-profile pointer (an id with no matching record) by
    /// clearing it instead of failing startup.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the ports.
    pub async fn load(store: R, settings: S, publisher: P) -> Result<Self, ModeKitError> {
        if let Some(id) = store.active_profile().await?
            && store.get(id).await?.is_none()
        {
            tracing::warn!(%id, "active profile does not resolve, clearing pointer");
            store.set_active_profile(None).await?;
        }

        Ok(Self {
            store,
            settings,
            publisher,
            write_lock: tokio::sync::Mutex::new(()),
        })
    }

    /// Allocate a draft profile with a fresh id and the given name.
    ///
    /// The draft is not durable until passed to [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::Validation`] when `name_hint` is empty.
    pub fn create(&self, name_hint: &str) -> Result<Profile, ModeKitError> {
        Profile::builder().name(name_hint).build()
    }

    /// Insert or replace the record for `profile.id`.
    ///
    /// Emits `ProfileChanged` on success.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::Validation`] if invariants fail, or a
    /// storage error propagated from the record store.
    #[tracing::instrument(skip(self, profile), fields(profile_name = %profile.name))]
    pub async fn save(&self, profile: Profile) -> Result<(), ModeKitError> {
        let _guard = self.write_lock.lock().await;

        profile.validate()?;
        let id = profile.id;
        self.store.upsert(profile).await?;

        let _ = self.publisher.publish(ProfileEvent::profile_changed(id)).await;
        Ok(())
    }

    /// Delete a profile record.
    ///
    /// When the removed profile was active, the pointer falls back to the
    /// first remaining profile in display order, or to none. Emits
    /// `ProfileChanged`, then `ActiveProfileChanged` if the pointer moved.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::NotFound`] when `id` is unknown, or a
    /// storage error from the record store.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: ProfileId) -> Result<(), ModeKitError> {
        let _guard = self.write_lock.lock().await;

        if self.store.get(id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Profile",
                id: id.to_string(),
            }
            .into());
        }

        let was_active = self.store.active_profile().await? == Some(id);
        self.store.delete(id).await?;

        let fallback = if was_active {
            let fallback = self.list_all().await?.first().map(|profile| profile.id);
            self.store.set_active_profile(fallback).await?;
            Some(fallback)
        } else {
            None
        };

        let _ = self.publisher.publish(ProfileEvent::profile_changed(id)).await;
        if let Some(fallback) = fallback {
            let _ = self
                .publisher
                .publish(ProfileEvent::active_profile_changed(fallback))
                .await;
        }
        Ok(())
    }

    /// Make the given profile the active one and apply its actions to the
    /// settings store, in sequence order (last write wins on conflicting
    /// keys). Actions are skipped while the system is disabled.
    ///
    /// Emits `ActiveProfileChanged` on success.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::NotFound`] when `id` is unknown — the
    /// pointer is left unchanged — or a storage error from the ports.
    #[tracing::instrument(skip(self))]
    pub async fn set_active(&self, id: ProfileId) -> Result<(), ModeKitError> {
        let _guard = self.write_lock.lock().await;

        let profile = self.store.get(id).await?.ok_or_else(|| NotFoundError {
            entity: "Profile",
            id: id.to_string(),
        })?;

        self.store.set_active_profile(Some(id)).await?;

        if self.is_enabled().await? {
            self.apply_actions(&profile).await?;
        }

        let _ = self
            .publisher
            .publish(ProfileEvent::active_profile_changed(Some(id)))
            .await;
        Ok(())
    }

    /// Remove all profiles, restore a single default profile, and make it
    /// active. Irreversible. Emits `ProfileChanged` for the restored
    /// profile and `ActiveProfileChanged`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the record store.
    #[tracing::instrument(skip(self))]
    pub async fn reset_all(&self) -> Result<Profile, ModeKitError> {
        let _guard = self.write_lock.lock().await;

        for profile in self.store.get_all().await? {
            self.store.delete(profile.id).await?;
        }

        let default = Profile::builder().name(DEFAULT_PROFILE_NAME).build()?;
        self.store.upsert(default.clone()).await?;
        self.store.set_active_profile(Some(default.id)).await?;

        let _ = self
            .publisher
            .publish(ProfileEvent::profile_changed(default.id))
            .await;
        let _ = self
            .publisher
            .publish(ProfileEvent::active_profile_changed(Some(default.id)))
            .await;
        Ok(default)
    }

    /// List all profiles ordered by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the record store.
    pub async fn list_all(&self) -> Result<Vec<Profile>, ModeKitError> {
        let mut profiles = self.store.get_all().await?;
        profiles.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.as_uuid().cmp(&b.id.as_uuid()))
        });
        Ok(profiles)
    }

    /// Look up a profile by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::NotFound`] when no profile with `id` exists,
    /// or a storage error from the record store.
    pub async fn get(&self, id: ProfileId) -> Result<Profile, ModeKitError> {
        self.store.get(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Profile",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Resolve the active-profile pointer, if it is set.
    ///
    /// The pointer survives disable/enable cycles; consumers that care
    /// about evaluation semantics must also check [`is_enabled`](Self::is_enabled).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the record store.
    pub async fn get_active(&self) -> Result<Option<Profile>, ModeKitError> {
        match self.store.active_profile().await? {
            Some(id) => self.store.get(id).await,
            None => Ok(None),
        }
    }

    /// Persist the system-wide enabled flag and emit `EnabledStateChanged`.
    ///
    /// Re-enabling does not auto-select an active profile; a previously
    /// set pointer stays as it was.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the settings store.
    #[tracing::instrument(skip(self))]
    pub async fn set_enabled(&self, enabled: bool) -> Result<(), ModeKitError> {
        let _guard = self.write_lock.lock().await;

        self.settings
            .put_bool(keys::SYSTEM_PROFILES_ENABLED, enabled)
            .await?;

        let _ = self
            .publisher
            .publish(ProfileEvent::enabled_state_changed(enabled))
            .await;
        Ok(())
    }

    /// Whether the profiles system is globally enabled (defaults to on).
    ///
    /// Read through to the settings store on every call, so flag changes
    /// originating outside this process are observed without a refresh
    /// hook.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the settings store.
    pub async fn is_enabled(&self) -> Result<bool, ModeKitError> {
        self.settings
            .get_bool(keys::SYSTEM_PROFILES_ENABLED, true)
            .await
    }

    async fn apply_actions(&self, profile: &Profile) -> Result<(), ModeKitError> {
        for action in &profile.actions {
            match action.value {
                SettingValue::Bool(value) => {
                    self.settings.put_bool(&action.setting_key, value).await?;
                }
                SettingValue::Int(value) => {
                    self.settings.put_int(&action.setting_key, value).await?;
                }
            }
        }
        Ok(())
    }
}
