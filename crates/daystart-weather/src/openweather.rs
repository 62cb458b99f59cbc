//! OpenWeather client: current conditions and reverse geocoding.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::types::{LocationFix, UnitSystem, WeatherSnapshot};

const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";
const OPENWEATHER_GEO_URL: &str = "https://api.openweathermap.org/geo/1.0";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API error: status {0}")]
    Api(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    wind: Option<OwmWind>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmGeoPlace {
    name: String,
    #[serde(default)]
    country: String,
}

/// Client for the OpenWeather current-conditions and geocoding endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_base: String,
    geo_base: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a client against the public OpenWeather API.
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_base_urls(api_key, OPENWEATHER_API_URL, OPENWEATHER_GEO_URL)
    }

    /// Create a client with optional per-endpoint overrides; an unset
    /// endpoint keeps its public default. This is the configuration seam,
    /// where either override may be present on its own.
    pub fn with_overrides(
        api_key: impl Into<String>,
        api_base: Option<&str>,
        geo_base: Option<&str>,
    ) -> anyhow::Result<Self> {
        Self::with_base_urls(
            api_key,
            api_base.unwrap_or(OPENWEATHER_API_URL),
            geo_base.unwrap_or(OPENWEATHER_GEO_URL),
        )
    }

    /// Create a client against custom base URLs (proxies, tests).
    pub fn with_base_urls(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        geo_base: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            geo_base: geo_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Fetch current conditions for a resolved location in the requested
    /// unit system. Temperatures are rounded to whole display units at the
    /// edge; the display fields come from the fix, not the provider.
    pub async fn current_conditions(
        &self,
        fix: &LocationFix,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/weather", self.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", fix.latitude.to_string()),
                ("lon", fix.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", units.label().to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Api(response.status().as_u16()));
        }

        let body: OwmCurrentResponse = response.json().await?;
        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("empty weather array".to_string()))?;

        Ok(WeatherSnapshot {
            temperature: body.main.temp.round(),
            condition: condition.main,
            description: condition.description,
            humidity: body.main.humidity,
            wind_speed: body.wind.map(|w| w.speed).unwrap_or(0.0),
            feels_like: body.main.feels_like.round(),
            location: fix.name.clone(),
            country: fix.country.clone(),
            icon: condition.icon,
            units,
        })
    }

    /// Reverse geocode coordinates to a place name and country code.
    /// Returns `None` on any failure; the caller keeps its coordinates.
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Option<(String, String)> {
        let url = format!("{}/reverse", self.geo_base);
        let response = match self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("limit", "1".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Reverse geocode request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Reverse geocode returned status {}", response.status());
            return None;
        }

        let places: Vec<OwmGeoPlace> = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!("Reverse geocode parse error: {}", e);
                return None;
            }
        };

        let place = places.into_iter().next()?;
        tracing::info!("Reverse geocoded to: {}", place.name);
        Some((place.name, place.country))
    }
}
