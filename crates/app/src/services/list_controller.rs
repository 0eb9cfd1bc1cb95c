//! Profile list controller — a read-only, render-ready projection of the
//! profile set.
//!
//! External state changes arrive as bus events; the controller recomputes
//! its snapshot on its own task in response (never from inside the
//! emitting operation), which is what keeps bus delivery free of
//! re-entrant registry calls.

use std::sync::Arc;

use tokio::sync::broadcast;

use modekit_domain::error::ModeKitError;
use modekit_domain::event::ProfileEvent;
use modekit_domain::id::ProfileId;

use crate::ports::{EventPublisher, ProfileStore, SettingsStore};
use crate::services::profile_registry::ProfileRegistry;

/// One row of the rendered profile list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileListEntry {
    pub id: ProfileId,
    pub name: String,
    pub is_active: bool,
}

/// Status line describing the profiles system as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSummary {
    /// The system is globally disabled.
    Off,
    /// The named profile is active.
    Active(String),
    /// Enabled, but no profile is currently active.
    NoneActive,
}

impl std::fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("Profiles off"),
            Self::Active(name) => f.write_str(name),
            Self::NoneActive => f.write_str("No active profile"),
        }
    }
}

/// Read-only projection over a shared [`ProfileRegistry`].
pub struct ProfileListController<R, S, P> {
    registry: Arc<ProfileRegistry<R, S, P>>,
    cache: std::sync::Mutex<Vec<ProfileListEntry>>,
}

impl<R, S, P> ProfileListController<R, S, P>
where
    R: ProfileStore,
    S: SettingsStore,
    P: EventPublisher,
{
    /// Create a controller over the given registry.
    #[must_use]
    pub fn new(registry: Arc<ProfileRegistry<R, S, P>>) -> Self {
        Self {
            registry,
            cache: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Derive the current list: one entry per profile in display order,
    /// with the active one marked. Empty while the system is disabled —
    /// the list view is blanked when the feature is globally off.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    pub async fn snapshot(&self) -> Result<Vec<ProfileListEntry>, ModeKitError> {
        if !self.registry.is_enabled().await? {
            return Ok(Vec::new());
        }

        let active_id = self.registry.get_active().await?.map(|profile| profile.id);
        let entries = self
            .registry
            .list_all()
            .await?
            .into_iter()
            .map(|profile| ProfileListEntry {
                id: profile.id,
                is_active: active_id == Some(profile.id),
                name: profile.name,
            })
            .collect();
        Ok(entries)
    }

    /// Recompute the snapshot and store it as the cached copy.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    pub async fn refresh(&self) -> Result<Vec<ProfileListEntry>, ModeKitError> {
        let entries = self.snapshot().await?;
        *self.cache.lock().expect("cache lock poisoned") = entries.clone();
        Ok(entries)
    }

    /// The snapshot computed by the most recent [`refresh`](Self::refresh).
    #[must_use]
    pub fn cached(&self) -> Vec<ProfileListEntry> {
        self.cache.lock().expect("cache lock poisoned").clone()
    }

    /// Make the given profile active.
    ///
    /// # Errors
    ///
    /// Propagates [`ProfileRegistry::set_active`] errors unchanged.
    pub async fn select_profile(&self, id: ProfileId) -> Result<(), ModeKitError> {
        self.registry.set_active(id).await
    }

    /// One-line status: off, the active profile's name, or a fallback.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    pub async fn summary(&self) -> Result<ProfileSummary, ModeKitError> {
        if !self.registry.is_enabled().await? {
            return Ok(ProfileSummary::Off);
        }
        Ok(match self.registry.get_active().await? {
            Some(profile) => ProfileSummary::Active(profile.name),
            None => ProfileSummary::NoneActive,
        })
    }

    /// Consume bus events, refreshing the cached snapshot after each one.
    ///
    /// Runs until the bus is closed. A lagged receiver just triggers a
    /// refresh: the snapshot is derived from current state, so skipped
    /// events cost nothing.
    pub async fn run(&self, mut receiver: broadcast::Receiver<ProfileEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(error) = self.refresh().await {
                        tracing::warn!(%error, "failed to refresh profile list");
                    } else {
                        tracing::debug!(kind = %event.kind, "profile list refreshed");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "profile list receiver lagged");
                    if let Err(error) = self.refresh().await {
                        tracing::warn!(%error, "failed to refresh profile list");
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}
