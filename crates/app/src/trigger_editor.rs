//! Trigger set editor — an uncommitted working copy of one profile's
//! trigger configuration, driven by the multi-step setup wizard.
//!
//! The editor owns a detached snapshot of the profile's triggers; durable
//! state is only touched by [`commit`](TriggerSetEditor::commit), which
//! writes the working set back through the registry. Dropping or discarding
//! a session has no side effects.

use modekit_domain::error::{InvalidStateError, ModeKitError};
use modekit_domain::id::ProfileId;
use modekit_domain::profile::{Profile, TriggerConfig, TriggerKind};

use crate::ports::{CapabilityProbe, EventPublisher, ProfileStore, SettingsStore};
use crate::services::profile_registry::ProfileRegistry;

/// What the caller should do after a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Editing an existing profile; the wizard is finished.
    Done,
    /// A new profile was just created; proceed to the actions setup step.
    SetUpActions,
}

/// One wizard page, derived from the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerPage {
    pub kind: TriggerKind,
    /// The working-copy configuration for this kind, if any.
    pub config: Option<TriggerConfig>,
}

impl TriggerPage {
    /// Human-readable tab title for this page.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.kind {
            TriggerKind::Wifi => "Wi-Fi",
            TriggerKind::Bluetooth => "Bluetooth",
            TriggerKind::Nfc => "NFC",
            TriggerKind::Connectivity => "Connectivity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionPhase {
    Open,
    Committed,
    Discarded,
}

/// A caller-owned editing session over one profile's trigger set.
///
/// State machine: `Open → (set_trigger)* → Committed | Discarded`. Both
/// terminal states reject further mutation with
/// [`ModeKitError::InvalidState`].
pub struct TriggerSetEditor {
    profile: Profile,
    working: Vec<TriggerConfig>,
    supported: Vec<TriggerKind>,
    is_new: bool,
    phase: SessionPhase,
}

impl TriggerSetEditor {
    /// Start a session over `profile`, snapshotting its triggers into a
    /// working copy.
    ///
    /// The supported kind set is computed once, here: kinds the probe
    /// reports unsupported are omitted from the presented pages entirely
    /// rather than shown disabled.
    #[must_use]
    pub fn begin(profile: Profile, is_new: bool, probe: &impl CapabilityProbe) -> Self {
        let supported = TriggerKind::ALL
            .into_iter()
            .filter(|kind| probe.has_capability(*kind))
            .collect();
        let working = profile.triggers.clone();
        Self {
            profile,
            working,
            supported,
            is_new,
            phase: SessionPhase::Open,
        }
    }

    /// Id of the profile under edit.
    #[must_use]
    pub fn profile_id(&self) -> ProfileId {
        self.profile.id
    }

    /// Whether this session creates a brand-new profile.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Insert or replace the working-copy configuration for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::InvalidState`] after commit or discard.
    pub fn set_trigger(
        &mut self,
        kind: TriggerKind,
        match_value: impl Into<String>,
        enabled: bool,
    ) -> Result<(), ModeKitError> {
        self.ensure_open()?;

        let config = TriggerConfig {
            kind,
            match_value: match_value.into(),
            enabled,
        };
        match self.working.iter_mut().find(|c| c.kind == kind) {
            Some(existing) => *existing = config,
            None => self.working.push(config),
        }
        Ok(())
    }

    /// The wizard pages: one per supported kind, in declared order,
    /// re-derived from the working copy on every call.
    pub fn pages(&self) -> impl Iterator<Item = TriggerPage> + '_ {
        self.supported.iter().map(|kind| TriggerPage {
            kind: *kind,
            config: self
                .working
                .iter()
                .find(|config| config.kind == *kind)
                .cloned(),
        })
    }

    /// Write the working copy back onto the profile and save it through
    /// the registry. On success the session becomes terminal and, for
    /// new-profile sessions, the caller is told to proceed to the actions
    /// step.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::InvalidState`] after commit or discard.
    /// Validation failures from [`ProfileRegistry::save`] propagate
    /// unchanged and leave the session open so the caller can retry.
    pub async fn commit<R, S, P>(
        &mut self,
        registry: &ProfileRegistry<R, S, P>,
    ) -> Result<NextStep, ModeKitError>
    where
        R: ProfileStore,
        S: SettingsStore,
        P: EventPublisher,
    {
        self.ensure_open()?;

        let mut profile = self.profile.clone();
        profile.triggers = self.working.clone();
        registry.save(profile).await?;

        self.phase = SessionPhase::Committed;
        Ok(if self.is_new {
            NextStep::SetUpActions
        } else {
            NextStep::Done
        })
    }

    /// Abandon the working copy. No repository interaction.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::InvalidState`] after commit or discard.
    pub fn discard(&mut self) -> Result<(), ModeKitError> {
        self.ensure_open()?;
        self.phase = SessionPhase::Discarded;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), ModeKitError> {
        match self.phase {
            SessionPhase::Open => Ok(()),
            SessionPhase::Committed => Err(InvalidStateError { state: "committed" }.into()),
            SessionPhase::Discarded => Err(InvalidStateError { state: "discarded" }.into()),
        }
    }
}
