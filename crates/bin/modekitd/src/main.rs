//! # modekitd — modekit daemon
//!
//! Composition root that wires all adapters together and runs the
//! profiles core.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations (or wire
//!   the in-memory stores when running ephemeral)
//! - Construct store implementations (adapters)
//! - Construct the registry and list controller, injecting stores via
//!   port traits
//! - Keep the list controller refreshed from the event bus
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;

use modekit_adapter_memory::{MemoryProfileStore, MemorySettingsStore};
use modekit_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteProfileStore, SqliteSettingsStore,
};
use modekit_app::event_bus::InProcessEventBus;
use modekit_app::ports::{ProfileStore, SettingsStore};
use modekit_app::services::list_controller::ProfileListController;
use modekit_app::services::profile_registry::ProfileRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .context("invalid logging filter")?,
        )
        .init();

    if config.database.ephemeral {
        tracing::info!("using ephemeral in-memory storage");
        run(MemoryProfileStore::new(), MemorySettingsStore::new()).await
    } else {
        let db = StorageConfig {
            database_url: config.database_url().to_string(),
        }
        .build()
        .await
        .context("failed to initialize database")?;
        let pool = db.pool().clone();

        run(
            SqliteProfileStore::new(pool.clone()),
            SqliteSettingsStore::new(pool),
        )
        .await
    }
}

async fn run<R, S>(store: R, settings: S) -> anyhow::Result<()>
where
    R: ProfileStore + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
{
    let event_bus = Arc::new(InProcessEventBus::new(256));
    let receiver = event_bus.subscribe();

    let registry = Arc::new(
        ProfileRegistry::load(store, settings, event_bus)
            .await
            .context("failed to load profile registry")?,
    );

    // First run: restore the default profile so a profile can always be
    // selected.
    if registry.list_all().await?.is_empty() {
        let default = registry.reset_all().await?;
        tracing::info!(name = %default.name, id = %default.id, "seeded default profile");
    }

    let controller = Arc::new(ProfileListController::new(registry.clone()));
    controller.refresh().await?;
    tracing::info!(
        summary = %controller.summary().await?,
        profiles = controller.cached().len(),
        "modekitd ready"
    );

    let worker = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.run(receiver).await })
    };

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("shutting down");
    worker.abort();

    Ok(())
}
