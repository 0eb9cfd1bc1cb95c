//! # modekit-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProfileStore` — durable storage for profile records and the active pointer
//!   - `SettingsStore` — scalar system settings (booleans, ints)
//!   - `EventPublisher` — fan-out of profile events
//!   - `CapabilityProbe` — hardware capability queries (NFC presence, …)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProfileRegistry` — profile CRUD, single-active invariant, enabled flag
//!   - `TriggerSetEditor` — uncommitted working copy for the trigger wizard
//!   - `ProfileListController` — render-ready projection of the profile list
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `modekit-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
pub mod trigger_editor;
