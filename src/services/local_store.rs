//! Local key/value store for SkillSwap.
//!
//! The browser original kept every piece of state in per-origin local
//! storage as JSON strings. This store reproduces those semantics over
//! SQLite: one row per key, values serialized as whole JSON blobs and
//! always read-modify-written in full. A corrupt value resets its key and
//! the caller falls back to the feature's empty/default state.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::connection::Database;
use crate::types::errors::StoreError;

/// Well-known storage keys.
pub mod keys {
    pub const USERS: &str = "skillswap_users";
    pub const SESSION: &str = "skillswap_session";
    pub const PORTFOLIO: &str = "skillswap_portfolio";
    pub const HIDDEN_JOBS: &str = "skillswap_hidden_jobs";
    pub const RESUME: &str = "skillswap_resume";
}

/// JSON-blob-per-key store backed by SQLite.
///
/// Cloning is cheap: clones share the same database handle.
#[derive(Clone)]
pub struct LocalStore {
    db: Arc<Database>,
}

impl LocalStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads and deserializes the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent. A value that no longer
    /// parses is treated as corrupt: the key is removed and `Ok(None)` is
    /// returned so the feature degrades to its default state.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let conn = self.db.connection();
        let result = conn.query_row(
            "SELECT value FROM local_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        let json = match result {
            Ok(json) => json,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::DatabaseError(e.to_string())),
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("resetting corrupt store key {}: {}", key, e);
                self.remove(key)?;
                Ok(None)
            }
        }
    }

    /// Reads the value under `key`, falling back to `T::default()` when the
    /// key is absent or corrupt.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    /// Serializes `value` and writes it under `key`, replacing any previous
    /// value whole.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO local_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, json, Self::now()],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// Removes the value under `key`. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute("DELETE FROM local_store WHERE key = ?1", params![key])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Returns true if a value exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        let count: i64 = self
            .db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM local_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .unwrap_or(0);
        count > 0
    }
}
