//! Key-value repository backed by SQLite.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use strictly_memory::{ScoreStore, StoreError};
use tracing::{debug, info, instrument};

use crate::db::{DbError, KvEntry, NewKvEntry, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// String key-value store in a SQLite file.
///
/// Each call opens its own connection, so the repository is cheap to clone.
#[derive(Debug, Clone)]
pub struct KvRepository {
    db_path: String,
}

impl KvRepository {
    /// Opens the database at `db_path`, creating it and applying pending
    /// migrations if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the file cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, DbError> {
        let repo = Self {
            db_path: db_path.as_ref().to_string(),
        };

        let mut conn = repo.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migrations failed: {}", e)))?;

        info!(path = %repo.db_path, applied = applied.len(), "KvRepository opened");
        Ok(repo)
    }

    /// Path of the database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Reads one entry. Returns `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_entry(&self, key: &str) -> Result<Option<KvEntry>, DbError> {
        let mut conn = self.connection()?;
        let entry = schema::kv_entries::table
            .find(key)
            .select(KvEntry::as_select())
            .first(&mut conn)
            .optional()?;

        debug!(found = entry.is_some(), "Entry looked up");
        Ok(entry)
    }

    /// Writes an entry, replacing any previous value for the key.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn put(&self, key: &str, value: &str) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let entry = NewKvEntry::new(
            key.to_string(),
            value.to_string(),
            chrono::Utc::now().naive_utc(),
        );

        diesel::replace_into(schema::kv_entries::table)
            .values(&entry)
            .execute(&mut conn)?;

        debug!("Entry written");
        Ok(())
    }

    /// Deletes an entry. Returns true if it existed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn delete(&self, key: &str) -> Result<bool, DbError> {
        let mut conn = self.connection()?;
        let deleted = diesel::delete(schema::kv_entries::table.find(key)).execute(&mut conn)?;

        debug!(deleted, "Entry deleted");
        Ok(deleted > 0)
    }

    /// Lists every entry, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<KvEntry>, DbError> {
        let mut conn = self.connection()?;
        let entries = schema::kv_entries::table
            .order(schema::kv_entries::key.asc())
            .select(KvEntry::as_select())
            .load(&mut conn)?;

        debug!(count = entries.len(), "Entries loaded");
        Ok(entries)
    }
}

impl ScoreStore for KvRepository {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get_entry(key)?.map(|entry| entry.value().clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(self.put(key, value)?)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.delete(key)?;
        Ok(())
    }
}
