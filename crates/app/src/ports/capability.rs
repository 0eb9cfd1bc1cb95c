//! Capability port — hardware capability queries.

use modekit_domain::profile::TriggerKind;

/// Answers whether the host device supports a trigger kind's hardware
/// (e.g. whether an NFC radio is present).
///
/// Queries are synchronous: the host either knows its feature set up front
/// or caches it on first use.
pub trait CapabilityProbe {
    /// Whether the device can evaluate triggers of the given kind.
    fn has_capability(&self, kind: TriggerKind) -> bool;
}

impl<T: CapabilityProbe + ?Sized> CapabilityProbe for std::sync::Arc<T> {
    fn has_capability(&self, kind: TriggerKind) -> bool {
        (**self).has_capability(kind)
    }
}
