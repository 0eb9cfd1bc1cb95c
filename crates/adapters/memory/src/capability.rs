//! Fixed-set [`CapabilityProbe`].

use std::collections::HashSet;

use modekit_app::ports::CapabilityProbe;
use modekit_domain::profile::TriggerKind;

/// Capability probe answering from a fixed set, decided at construction.
#[derive(Debug, Clone)]
pub struct StaticCapabilities {
    supported: HashSet<TriggerKind>,
}

impl StaticCapabilities {
    /// A device supporting every trigger kind.
    #[must_use]
    pub fn all() -> Self {
        Self {
            supported: TriggerKind::ALL.into_iter().collect(),
        }
    }

    /// A device supporting no trigger kind.
    #[must_use]
    pub fn none() -> Self {
        Self {
            supported: HashSet::new(),
        }
    }

    /// Remove one kind from the supported set (e.g. a device without NFC).
    #[must_use]
    pub fn without(mut self, kind: TriggerKind) -> Self {
        self.supported.remove(&kind);
        self
    }

    /// Add one kind to the supported set.
    #[must_use]
    pub fn with(mut self, kind: TriggerKind) -> Self {
        self.supported.insert(kind);
        self
    }
}

impl CapabilityProbe for StaticCapabilities {
    fn has_capability(&self, kind: TriggerKind) -> bool {
        self.supported.contains(&kind)
    }
}
