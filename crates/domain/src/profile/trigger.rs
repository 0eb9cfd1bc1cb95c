//! Trigger configuration — a condition associated with a profile.
//!
//! The core only tracks which triggers are *configured*; evaluating them
//! (matching an NFC tag, a connectivity transition, …) is the job of
//! pluggable evaluators outside this crate.

use serde::{Deserialize, Serialize};

/// The closed set of trigger capabilities a profile can be configured with.
///
/// The declared order here is also the presentation order of the trigger
/// setup wizard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Joining or leaving a Wi-Fi network (match value: SSID).
    Wifi,
    /// Connecting or disconnecting a Bluetooth device (match value: address).
    Bluetooth,
    /// Scanning an NFC tag (match value: tag id).
    Nfc,
    /// A general connectivity transition (match value: network type token).
    Connectivity,
}

impl TriggerKind {
    /// All kinds, in declared (presentation) order.
    pub const ALL: [Self; 4] = [Self::Wifi, Self::Bluetooth, Self::Nfc, Self::Connectivity];
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::Wifi => "wifi",
            Self::Bluetooth => "bluetooth",
            Self::Nfc => "nfc",
            Self::Connectivity => "connectivity",
        };
        f.write_str(token)
    }
}

/// One configured trigger condition on a profile.
///
/// A profile holds at most one configuration per [`TriggerKind`]; the
/// `match_value` payload is interpreted by the kind's external evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub kind: TriggerKind,
    pub match_value: String,
    pub enabled: bool,
}

impl TriggerConfig {
    /// Create an enabled configuration for the given kind and match value.
    #[must_use]
    pub fn new(kind: TriggerKind, match_value: impl Into<String>) -> Self {
        Self {
            kind,
            match_value: match_value.into(),
            enabled: true,
        }
    }
}

impl std::fmt::Display for TriggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.match_value)?;
        if !self.enabled {
            f.write_str(" [disabled]")?;
        }
        Ok(())
    }
}
