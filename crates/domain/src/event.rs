//! Profile event — an immutable record of a profile-state transition.
//!
//! Events are produced when the enabled flag flips, a profile record is
//! created/updated/removed, or the active profile changes. They are the
//! notification interface exposed to list views and status summaries.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, ProfileId};
use crate::time::{Timestamp, now};

/// A record of a single profile-state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEvent {
    pub id: EventId,
    pub kind: ProfileEventKind,
    pub timestamp: Timestamp,
}

impl ProfileEvent {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(kind: ProfileEventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: now(),
        }
    }

    /// The system-wide enabled flag changed.
    #[must_use]
    pub fn enabled_state_changed(enabled: bool) -> Self {
        Self::new(ProfileEventKind::EnabledStateChanged { enabled })
    }

    /// A profile record was created, updated, or removed.
    #[must_use]
    pub fn profile_changed(id: ProfileId) -> Self {
        Self::new(ProfileEventKind::ProfileChanged { id })
    }

    /// The active-profile pointer moved (`None` means no profile is active).
    #[must_use]
    pub fn active_profile_changed(id: Option<ProfileId>) -> Self {
        Self::new(ProfileEventKind::ActiveProfileChanged { id })
    }
}

/// What kind of transition an event announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileEventKind {
    /// The system-wide enabled flag flipped.
    EnabledStateChanged { enabled: bool },
    /// The record set changed for the given profile id.
    ProfileChanged { id: ProfileId },
    /// The active pointer now references the given profile id, if any.
    ActiveProfileChanged { id: Option<ProfileId> },
}

impl std::fmt::Display for ProfileEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnabledStateChanged { enabled } => write!(f, "enabled_state_changed({enabled})"),
            Self::ProfileChanged { id } => write!(f, "profile_changed({id})"),
            Self::ActiveProfileChanged { id: Some(id) } => {
                write!(f, "active_profile_changed({id})")
            }
            Self::ActiveProfileChanged { id: None } => f.write_str("active_profile_changed(none)"),
        }
    }
}
