//! # modekit-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `ProfileStore` and `SettingsStore` port traits defined
//!   in `modekit-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `modekit-app` (for port traits) and `modekit-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod error;
mod pool;
mod profile_store;
mod settings_store;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use profile_store::SqliteProfileStore;
pub use settings_store::SqliteSettingsStore;
