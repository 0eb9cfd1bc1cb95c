//! Profile — a named bundle of trigger configurations and actions.
//!
//! A profile represents one operating mode of the device. Its triggers
//! describe *when* the mode should engage (evaluated externally); its
//! actions describe *what* setting changes apply when it becomes active.
//! Exactly one profile is active system-wide at any time; tracking that
//! pointer is the registry's job, not the profile's.

mod action;
mod trigger;

pub use action::{Action, SettingValue};
pub use trigger::{TriggerConfig, TriggerKind};

use serde::{Deserialize, Serialize};

use crate::error::{ModeKitError, ValidationError};
use crate::id::ProfileId;

/// A named bundle of trigger configurations and actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub triggers: Vec<TriggerConfig>,
    pub actions: Vec<Action>,
}

impl Profile {
    /// Create a builder for constructing a [`Profile`].
    #[must_use]
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - two trigger configurations share a kind
    ///   ([`ValidationError::DuplicateTriggerKind`])
    pub fn validate(&self) -> Result<(), ModeKitError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        for (index, config) in self.triggers.iter().enumerate() {
            if self.triggers[..index].iter().any(|c| c.kind == config.kind) {
                return Err(ValidationError::DuplicateTriggerKind { kind: config.kind }.into());
            }
        }
        Ok(())
    }

    /// Look up the trigger configuration for a kind, if present.
    #[must_use]
    pub fn trigger(&self, kind: TriggerKind) -> Option<&TriggerConfig> {
        self.triggers.iter().find(|config| config.kind == kind)
    }

    /// Insert or replace the trigger configuration for `config.kind`.
    pub fn set_trigger(&mut self, config: TriggerConfig) {
        match self.triggers.iter_mut().find(|c| c.kind == config.kind) {
            Some(existing) => *existing = config,
            None => self.triggers.push(config),
        }
    }
}

/// Step-by-step builder for [`Profile`].
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    id: Option<ProfileId>,
    name: Option<String>,
    triggers: Vec<TriggerConfig>,
    actions: Vec<Action>,
}

impl ProfileBuilder {
    #[must_use]
    pub fn id(mut self, id: ProfileId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn trigger(mut self, config: TriggerConfig) -> Self {
        self.triggers.push(config);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Consume the builder, validate, and return a [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns [`ModeKitError::Validation`] if required fields are missing
    /// or empty, or if two triggers share a kind.
    pub fn build(self) -> Result<Profile, ModeKitError> {
        let profile = Profile {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            triggers: self.triggers,
            actions: self.actions,
        };
        profile.validate()?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_profile() -> Profile {
        Profile::builder()
            .name("Work")
            .trigger(TriggerConfig::new(TriggerKind::Wifi, "OfficeNet"))
            .action(Action::put_bool("bluetooth_on", true))
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_profile_when_name_provided() {
        let profile = valid_profile();
        assert_eq!(profile.name, "Work");
        assert_eq!(profile.triggers.len(), 1);
        assert_eq!(profile.actions.len(), 1);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Profile::builder().build();
        assert!(matches!(
            result,
            Err(ModeKitError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_trigger_kinds_collide() {
        let result = Profile::builder()
            .name("Home")
            .trigger(TriggerConfig::new(TriggerKind::Wifi, "HomeNet"))
            .trigger(TriggerConfig::new(TriggerKind::Wifi, "GuestNet"))
            .build();
        assert!(matches!(
            result,
            Err(ModeKitError::Validation(
                ValidationError::DuplicateTriggerKind {
                    kind: TriggerKind::Wifi
                }
            ))
        ));
    }

    #[test]
    fn should_allow_profile_without_triggers_or_actions() {
        let profile = Profile::builder().name("Empty").build().unwrap();
        assert!(profile.triggers.is_empty());
        assert!(profile.actions.is_empty());
    }

    #[test]
    fn should_find_trigger_by_kind() {
        let profile = valid_profile();
        let config = profile.trigger(TriggerKind::Wifi).unwrap();
        assert_eq!(config.match_value, "OfficeNet");
        assert!(profile.trigger(TriggerKind::Nfc).is_none());
    }

    #[test]
    fn should_replace_existing_config_when_setting_same_kind() {
        let mut profile = valid_profile();
        profile.set_trigger(TriggerConfig::new(TriggerKind::Wifi, "OtherNet"));

        assert_eq!(profile.triggers.len(), 1);
        assert_eq!(
            profile.trigger(TriggerKind::Wifi).unwrap().match_value,
            "OtherNet"
        );
    }

    #[test]
    fn should_append_config_when_setting_new_kind() {
        let mut profile = valid_profile();
        profile.set_trigger(TriggerConfig::new(TriggerKind::Bluetooth, "AA:BB"));

        assert_eq!(profile.triggers.len(), 2);
        assert!(profile.trigger(TriggerKind::Bluetooth).is_some());
    }

    #[test]
    fn should_preserve_action_order() {
        let profile = Profile::builder()
            .name("Night")
            .action(Action::put_int("ring_volume", 0))
            .action(Action::put_bool("airplane_mode", true))
            .action(Action::put_int("ring_volume", 2))
            .build()
            .unwrap();

        assert_eq!(profile.actions[0], Action::put_int("ring_volume", 0));
        assert_eq!(profile.actions[2], Action::put_int("ring_volume", 2));
    }

    #[test]
    fn should_set_custom_id_via_builder() {
        let id = ProfileId::new();
        let profile = Profile::builder().id(id).name("Custom").build().unwrap();
        assert_eq!(profile.id, id);
    }

    #[test]
    fn should_roundtrip_profile_through_serde_json() {
        let profile = valid_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, profile.id);
        assert_eq!(parsed.name, profile.name);
        assert_eq!(parsed.triggers, profile.triggers);
        assert_eq!(parsed.actions, profile.actions);
    }
}
