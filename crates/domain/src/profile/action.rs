//! Action — a setting change applied when a profile becomes active.

use serde::{Deserialize, Serialize};

/// A scalar value accepted by the system settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", content = "value")]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

/// One setting key/value pair applied on activation.
///
/// Actions are evaluated in sequence order; on conflicting keys the last
/// write wins. There are no cross-action invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub setting_key: String,
    pub value: SettingValue,
}

impl Action {
    /// Create an action setting a boolean key.
    #[must_use]
    pub fn put_bool(setting_key: impl Into<String>, value: bool) -> Self {
        Self {
            setting_key: setting_key.into(),
            value: SettingValue::Bool(value),
        }
    }

    /// Create an action setting an integer key.
    #[must_use]
    pub fn put_int(setting_key: impl Into<String>, value: i64) -> Self {
        Self {
            setting_key: setting_key.into(),
            value: SettingValue::Int(value),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "set({}, {})", self.setting_key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_bool_action() {
        let action = Action::put_bool("airplane_mode", true);
        assert_eq!(action.to_string(), "set(airplane_mode, true)");
    }

    #[test]
    fn should_display_int_action() {
        let action = Action::put_int("ring_volume", 3);
        assert_eq!(action.to_string(), "set(ring_volume, 3)");
    }

    #[test]
    fn should_roundtrip_actions_through_serde_json() {
        let actions = vec![
            Action::put_bool("airplane_mode", false),
            Action::put_int("screen_timeout", 30),
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let parsed: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(&parsed, action);
        }
    }

    #[test]
    fn should_deserialize_value_from_tagged_json() {
        let json = serde_json::json!({
            "setting_key": "ring_volume",
            "value": {"type": "int", "value": 5}
        });
        let action: Action = serde_json::from_value(json).unwrap();
        assert_eq!(action.value, SettingValue::Int(5));
    }
}
