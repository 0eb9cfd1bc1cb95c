//! # modekit-domain
//!
//! Pure domain model for the modekit system-profiles core.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Profiles** (named bundles of trigger configurations and actions
//!   representing one operating mode)
//! - Define **Triggers** (configured hardware/connectivity conditions, at most
//!   one per kind per profile)
//! - Define **Actions** (setting key/value pairs applied when a profile
//!   becomes active)
//! - Define **Events** (profile-state transition records)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod profile;
