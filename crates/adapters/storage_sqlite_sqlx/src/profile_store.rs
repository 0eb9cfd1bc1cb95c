//! `SQLite` implementation of [`ProfileStore`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use modekit_app::ports::ProfileStore;
use modekit_domain::error::ModeKitError;
use modekit_domain::id::ProfileId;
use modekit_domain::profile::{Action, Profile, TriggerConfig};

use crate::error::StorageError;

struct Wrapper(Profile);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Profile> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let triggers_json: String = row.try_get("triggers")?;
        let actions_json: String = row.try_get("actions")?;

        let id = ProfileId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let triggers: Vec<TriggerConfig> = serde_json::from_str(&triggers_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let actions: Vec<Action> = serde_json::from_str(&actions_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Profile {
            id,
            name,
            triggers,
            actions,
        }))
    }
}

/// `SQLite`-backed profile-record store.
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    /// Create a new store backed by the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProfileStore for SqliteProfileStore {
    async fn upsert(&self, profile: Profile) -> Result<(), ModeKitError> {
        let triggers_json = serde_json::to_string(&profile.triggers).map_err(StorageError::from)?;
        let actions_json = serde_json::to_string(&profile.actions).map_err(StorageError::from)?;

        sqlx::query(
            "INSERT INTO profiles (id, name, triggers, actions) VALUES (?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, \
             triggers = excluded.triggers, actions = excluded.actions",
        )
        .bind(profile.id.to_string())
        .bind(&profile.name)
        .bind(&triggers_json)
        .bind(&actions_json)
        .execute(&self.pool)
        .await
        .map_err(StorageError::from)?;

        Ok(())
    }

    async fn get(&self, id: ProfileId) -> Result<Option<Profile>, ModeKitError> {
        let row: Option<Wrapper> = sqlx::query_as("SELECT * FROM profiles WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Profile>, ModeKitError> {
        let rows: Vec<Wrapper> = sqlx::query_as("SELECT * FROM profiles")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete(&self, id: ProfileId) -> Result<(), ModeKitError> {
        sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// A stored pointer that does not parse as a UUID is treated as unset;
    /// resolving it against the record set is the registry's job.
    async fn active_profile(&self) -> Result<Option<ProfileId>, ModeKitError> {
        let row: (Option<String>,) =
            sqlx::query_as("SELECT profile_id FROM active_profile WHERE slot = 0")
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?;
        Ok(row.0.and_then(|text| ProfileId::from_str(&text).ok()))
    }

    async fn set_active_profile(&self, id: Option<ProfileId>) -> Result<(), ModeKitError> {
        sqlx::query("UPDATE active_profile SET profile_id = ? WHERE slot = 0")
            .bind(id.map(|id| id.to_string()))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use modekit_domain::profile::TriggerKind;

    async fn store() -> SqliteProfileStore {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteProfileStore::new(db.pool().clone())
    }

    fn profile(name: &str) -> Profile {
        Profile::builder()
            .name(name)
            .trigger(TriggerConfig::new(TriggerKind::Wifi, "OfficeNet"))
            .action(Action::put_int("ring_volume", 2))
            .action(Action::put_bool("airplane_mode", false))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_roundtrip_profile_with_triggers_and_actions() {
        let store = store().await;
        let work = profile("Work");

        store.upsert(work.clone()).await.unwrap();
        let fetched = store.get(work.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Work");
        assert_eq!(fetched.triggers, work.triggers);
        assert_eq!(fetched.actions, work.actions);
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_profile() {
        let store = store().await;
        assert!(store.get(ProfileId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_replace_record_on_conflicting_upsert() {
        let store = store().await;
        let mut work = profile("Work");
        store.upsert(work.clone()).await.unwrap();

        work.name = "Office".to_string();
        work.triggers.clear();
        store.upsert(work.clone()).await.unwrap();

        let fetched = store.get(work.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Office");
        assert!(fetched.triggers.is_empty());
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_delete_record_and_ignore_unknown_id() {
        let store = store().await;
        let work = profile("Work");
        store.upsert(work.clone()).await.unwrap();

        store.delete(work.id).await.unwrap();
        store.delete(ProfileId::new()).await.unwrap();

        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_persist_and_clear_active_pointer() {
        let store = store().await;
        let work = profile("Work");
        store.upsert(work.clone()).await.unwrap();

        assert!(store.active_profile().await.unwrap().is_none());

        store.set_active_profile(Some(work.id)).await.unwrap();
        assert_eq!(store.active_profile().await.unwrap(), Some(work.id));

        store.set_active_profile(None).await.unwrap();
        assert!(store.active_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_treat_unparseable_pointer_as_unset() {
        let store = store().await;
        sqlx::query("UPDATE active_profile SET profile_id = 'not-a-uuid' WHERE slot = 0")
            .execute(&store.pool)
            .await
            .unwrap();

        assert!(store.active_profile().await.unwrap().is_none());
    }
}
