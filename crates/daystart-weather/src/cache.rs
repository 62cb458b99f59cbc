//! Short-TTL weather cache over the preference store.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use daystart_core::store::{CacheEntry, PreferenceStore};

use crate::types::WeatherSnapshot;

const WEATHER_CACHE_KEY: &str = "weather";

/// Default freshness window: entries older than this are dropped and
/// refetched.
pub const WEATHER_TTL: Duration = Duration::from_secs(10 * 60);

/// Persistent cache for the last resolved snapshot.
#[derive(Clone)]
pub struct WeatherCache {
    store: Arc<PreferenceStore>,
    ttl: Duration,
}

impl WeatherCache {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self::with_ttl(store, WEATHER_TTL)
    }

    /// Cache with a custom freshness window (`weather.refresh_minutes` in
    /// the configuration). A zero window disables caching: every entry is
    /// already expired when read back.
    pub fn with_ttl(store: Arc<PreferenceStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// The cached snapshot if it is still within the freshness window.
    /// Expired entries are deleted on the way out.
    pub fn fresh(&self) -> Option<WeatherSnapshot> {
        self.fresh_at(Utc::now().timestamp_millis())
    }

    /// Freshness check against an explicit clock (deterministic variant).
    pub fn fresh_at(&self, now_ms: i64) -> Option<WeatherSnapshot> {
        let entry: CacheEntry<WeatherSnapshot> = self.store.read_cache(WEATHER_CACHE_KEY)?;

        if entry.age_ms(now_ms) > self.ttl.as_millis() as i64 {
            tracing::debug!("Weather cache expired, dropping entry");
            if let Err(e) = self.store.remove(WEATHER_CACHE_KEY) {
                tracing::warn!("Failed to drop expired weather cache: {}", e);
            }
            return None;
        }

        Some(entry.payload)
    }

    /// Persist a snapshot stamped with the current time.
    pub fn store_snapshot(&self, snapshot: &WeatherSnapshot) {
        self.store_snapshot_at(snapshot, Utc::now().timestamp_millis());
    }

    /// Persist a snapshot with an explicit timestamp.
    pub fn store_snapshot_at(&self, snapshot: &WeatherSnapshot, written_at_ms: i64) {
        if let Err(e) = self.store.write_cache_at(WEATHER_CACHE_KEY, snapshot, written_at_ms) {
            tracing::warn!("Failed to cache weather data: {}", e);
        }
    }

    /// Drop the cache entry (manual refresh).
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(WEATHER_CACHE_KEY) {
            tracing::warn!("Failed to clear weather cache: {}", e);
        }
    }
}
