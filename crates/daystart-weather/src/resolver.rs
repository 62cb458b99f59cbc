//! Weather resolution: cache, location, fetch, demo fallback.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use daystart_core::store::PreferenceStore;

use crate::cache::{WeatherCache, WEATHER_TTL};
use crate::location::{LocationSource, LOCATION_TIMEOUT};
use crate::openweather::OpenWeatherClient;
use crate::types::{
    default_location, demo_snapshot, LocationFix, UnitSystem, WeatherPreferences, WeatherReport,
    WeatherSnapshot,
};
use crate::units::convert;

/// Resolves current weather for the user's preferences.
///
/// Never returns an error: total fetch failure degrades to the fixed demo
/// snapshot with [`WeatherReport::error`] set for the presentation layer.
pub struct WeatherResolver {
    client: OpenWeatherClient,
    cache: WeatherCache,
    location: Arc<dyn LocationSource>,
}

impl WeatherResolver {
    pub fn new(
        client: OpenWeatherClient,
        store: Arc<PreferenceStore>,
        location: Arc<dyn LocationSource>,
    ) -> Self {
        Self::with_refresh_interval(client, store, location, WEATHER_TTL)
    }

    /// Resolver with a custom cache freshness window, taken from
    /// `weather.refresh_minutes` in the configuration.
    pub fn with_refresh_interval(
        client: OpenWeatherClient,
        store: Arc<PreferenceStore>,
        location: Arc<dyn LocationSource>,
        refresh_interval: Duration,
    ) -> Self {
        Self { client, cache: WeatherCache::with_ttl(store, refresh_interval), location }
    }

    /// Resolve current weather.
    pub async fn resolve(&self, prefs: &WeatherPreferences) -> WeatherReport {
        self.resolve_at(prefs, Utc::now().timestamp_millis()).await
    }

    /// Resolve against an explicit clock (deterministic variant).
    pub async fn resolve_at(&self, prefs: &WeatherPreferences, now_ms: i64) -> WeatherReport {
        if let Some(snapshot) = self.cache.fresh_at(now_ms) {
            tracing::debug!("Serving cached weather snapshot");
            return WeatherReport::ok(snapshot);
        }

        let fix = self.resolve_location(prefs).await;

        match self.client.current_conditions(&fix, prefs.units).await {
            Ok(snapshot) => {
                self.cache.store_snapshot_at(&snapshot, now_ms);
                WeatherReport::ok(snapshot)
            }
            Err(e) => {
                tracing::warn!("Weather fetch failed, serving demo data: {}", e);
                // Demo constants are returned as-is, never converted
                let snapshot = demo_snapshot();
                self.cache.store_snapshot_at(&snapshot, now_ms);
                WeatherReport::degraded(snapshot, e.to_string())
            }
        }
    }

    /// Drop the cache entry and resolve again.
    pub async fn refresh(&self, prefs: &WeatherPreferences) -> WeatherReport {
        self.refresh_at(prefs, Utc::now().timestamp_millis()).await
    }

    /// Refresh against an explicit clock (deterministic variant).
    pub async fn refresh_at(&self, prefs: &WeatherPreferences, now_ms: i64) -> WeatherReport {
        self.cache.clear();
        self.resolve_at(prefs, now_ms).await
    }

    /// Unit-toggle path: convert an existing snapshot and rewrite the cache
    /// with it, without a network call.
    pub fn apply_units(&self, snapshot: &WeatherSnapshot, target: UnitSystem) -> WeatherSnapshot {
        let converted = convert(snapshot, target);
        self.cache.store_snapshot(&converted);
        converted
    }

    async fn resolve_location(&self, prefs: &WeatherPreferences) -> LocationFix {
        if !prefs.auto_location {
            // The custom name is display-only; coordinates stay at the
            // default regardless of the name.
            let mut fix = default_location();
            if let Some(name) = prefs.custom_location.as_ref().filter(|n| !n.trim().is_empty()) {
                fix.name = name.clone();
            }
            return fix;
        }

        match timeout(LOCATION_TIMEOUT, self.location.current()).await {
            Ok(Ok((latitude, longitude))) => {
                match self.client.reverse_geocode(latitude, longitude).await {
                    Some((name, country)) => LocationFix { latitude, longitude, name, country },
                    None => LocationFix {
                        latitude,
                        longitude,
                        name: "Current Location".to_string(),
                        country: String::new(),
                    },
                }
            }
            Ok(Err(e)) => {
                tracing::warn!("Location fix failed ({}), using default location", e);
                default_location()
            }
            Err(_) => {
                tracing::warn!("Location fix timed out, using default location");
                default_location()
            }
        }
    }
}
