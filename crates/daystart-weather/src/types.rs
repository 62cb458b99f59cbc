use serde::{Deserialize, Serialize};

use daystart_core::store::PreferenceStore;
use daystart_core::StoreError;

/// Unit system preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Wire label used as the provider's `units` parameter.
    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Display suffix for temperatures.
    pub fn temperature_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    /// Display suffix for wind speeds.
    pub fn wind_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }
}

/// Current conditions at a location.
///
/// Invariant: `temperature`, `feels_like` and `wind_speed` are always
/// expressed in `units`; conversion rewrites the values and the tag together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub condition: String,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub feels_like: f64,
    pub location: String,
    pub country: String,
    pub icon: String,
    pub units: UnitSystem,
}

/// Resolved coordinates plus display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// The fixed location substituted when no better fix is available.
pub fn default_location() -> LocationFix {
    LocationFix {
        latitude: 37.7749,
        longitude: -122.4194,
        name: "San Francisco".to_string(),
        country: "US".to_string(),
    }
}

/// User weather preferences, persisted on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPreferences {
    pub units: UnitSystem,
    pub auto_location: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_location: Option<String>,
}

impl Default for WeatherPreferences {
    fn default() -> Self {
        Self { units: UnitSystem::Metric, auto_location: true, custom_location: None }
    }
}

pub const KEY_WEATHER_PREFERENCES: &str = "weatherPreferences";

impl WeatherPreferences {
    /// Load persisted preferences, defaults on first read.
    pub fn load(store: &PreferenceStore) -> Self {
        store.get(KEY_WEATHER_PREFERENCES, Self::default())
    }

    /// Persist immediately.
    pub fn save(&self, store: &PreferenceStore) -> Result<(), StoreError> {
        store.set(KEY_WEATHER_PREFERENCES, self)
    }
}

/// A resolution outcome: always a displayable snapshot, plus the error that
/// degraded it to demo data when the fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub error: Option<String>,
}

impl WeatherReport {
    pub fn ok(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot, error: None }
    }

    pub fn degraded(snapshot: WeatherSnapshot, error: impl Into<String>) -> Self {
        Self { snapshot, error: Some(error.into()) }
    }
}

/// Fixed demo snapshot served when the provider is unreachable.
///
/// The constants are defined in metric and are returned as-is; the demo
/// path never runs through unit conversion.
pub fn demo_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 22.0,
        condition: "Clear".to_string(),
        description: "clear sky".to_string(),
        humidity: 45,
        wind_speed: 3.2,
        feels_like: 24.0,
        location: "San Francisco".to_string(),
        country: "US".to_string(),
        icon: "01d".to_string(),
        units: UnitSystem::Metric,
    }
}

/// Glyph for a provider condition label.
pub fn weather_glyph(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Fog" | "Haze" => "🌫️",
        "Dust" | "Sand" | "Tornado" => "🌪️",
        "Ash" => "🌋",
        "Squall" => "💨",
        _ => "🌤️",
    }
}
