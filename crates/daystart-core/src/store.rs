//! SQLite-backed preference store.
//!
//! A flat key-value namespace with JSON-encoded values. Every `set` is
//! synchronously durable before it returns; a `get` on a missing or corrupt
//! record yields the caller-supplied default. Corrupt records are discarded
//! so the next write starts clean.
//!
//! The resolvers also keep their caches here, each under its own key
//! namespace. The store never interprets those keys.

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StoreError;

/// A cached payload plus the epoch-millisecond timestamp it was written at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub payload: T,
    pub written_at_ms: i64,
}

impl<T> CacheEntry<T> {
    /// Age of this entry relative to `now_ms`.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.written_at_ms
    }
}

/// Durable key-value store for preferences and resolver caches.
pub struct PreferenceStore {
    conn: Mutex<Connection>,
}

impl PreferenceStore {
    /// Open (or create) a store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open(e.to_string()))?;
        let store = Self { conn: Mutex::new(conn) };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (tests and ephemeral runs).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open(e.to_string()))?;
        let store = Self { conn: Mutex::new(conn) };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .lock()
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS prefs (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    /// Get a value, falling back to `default` when the key is missing or the
    /// stored record cannot be decoded.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_opt(key).unwrap_or(default)
    }

    /// Get a value, `None` when missing or corrupt. A corrupt record is
    /// deleted so the namespace behaves as if it were never written.
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.raw_value(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Store read failed for '{}': {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding corrupt record for '{}': {}", key, e);
                if let Err(e) = self.remove(key) {
                    tracing::warn!("Failed to discard corrupt record '{}': {}", key, e);
                }
                None
            }
        }
    }

    /// Persist a value. Durable before this returns.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        self.conn
            .lock()
            .execute(
                "INSERT OR REPLACE INTO prefs (key, value) VALUES (?1, ?2)",
                params![key, encoded],
            )
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    /// Delete a key. Deleting an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .lock()
            .execute("DELETE FROM prefs WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    /// All keys starting with `prefix`, for namespace sweeps.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare("SELECT key FROM prefs WHERE key LIKE ?1")
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let pattern = format!("{}%", prefix);
        let rows = stmt
            .query_map(params![pattern], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    /// Write a cache entry stamped with the current time.
    pub fn write_cache<T: Serialize>(&self, key: &str, payload: &T) -> Result<(), StoreError> {
        self.write_cache_at(key, payload, Utc::now().timestamp_millis())
    }

    /// Write a cache entry with an explicit timestamp.
    pub fn write_cache_at<T: Serialize>(
        &self,
        key: &str,
        payload: &T,
        written_at_ms: i64,
    ) -> Result<(), StoreError> {
        self.set(key, &CacheEntry { payload, written_at_ms })
    }

    /// Read a cache entry. Missing and corrupt both come back as `None`.
    pub fn read_cache<T: DeserializeOwned>(&self, key: &str) -> Option<CacheEntry<T>> {
        self.get_opt(key)
    }

    fn raw_value(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .lock()
            .query_row("SELECT value FROM prefs WHERE key = ?1", params![key], |row| row.get(0))
            .optional()
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn store() -> PreferenceStore {
        PreferenceStore::in_memory().unwrap()
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = store();
        let sample = Sample { name: "test".into(), count: 3 };
        store.set("sample", &sample).unwrap();
        let loaded: Sample = store.get("sample", Sample { name: String::new(), count: 0 });
        assert_eq!(loaded, sample);
    }

    #[test]
    fn missing_key_returns_default() {
        let store = store();
        let loaded: u32 = store.get("absent", 42);
        assert_eq!(loaded, 42);
    }

    #[test]
    fn corrupt_record_returns_default_and_is_discarded() {
        let store = store();
        // A stored string is valid JSON but not a Sample
        store.set("sample", &"not a sample").unwrap();

        let loaded: Sample = store.get("sample", Sample { name: "default".into(), count: 0 });
        assert_eq!(loaded.name, "default");

        // The corrupt record was deleted, not left to fail again
        let raw: Option<String> = store.get_opt("sample");
        assert!(raw.is_none());
    }

    #[test]
    fn overwrite_replaces_value() {
        let store = store();
        store.set("n", &1u32).unwrap();
        store.set("n", &2u32).unwrap();
        assert_eq!(store.get("n", 0u32), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let store = store();
        store.set("k", &true).unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k", false), false);
    }

    #[test]
    fn keys_with_prefix_filters() {
        let store = store();
        store.set("daily-bg-41", &"a").unwrap();
        store.set("daily-bg-42", &"b").unwrap();
        store.set("userName", &"sns").unwrap();

        let mut keys = store.keys_with_prefix("daily-bg-").unwrap();
        keys.sort();
        assert_eq!(keys, vec!["daily-bg-41", "daily-bg-42"]);
    }

    #[test]
    fn cache_entry_round_trip_and_age() {
        let store = store();
        store.write_cache_at("cache", &"payload", 1_000).unwrap();

        let entry: CacheEntry<String> = store.read_cache("cache").unwrap();
        assert_eq!(entry.payload, "payload");
        assert_eq!(entry.written_at_ms, 1_000);
        assert_eq!(entry.age_ms(61_000), 60_000);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");

        {
            let store = PreferenceStore::open(&path).unwrap();
            store.set("persisted", &7u8).unwrap();
        }

        let store = PreferenceStore::open(&path).unwrap();
        assert_eq!(store.get("persisted", 0u8), 7);
    }
}
