use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Background image settings
    #[serde(default)]
    pub backgrounds: BackgroundsConfig,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundsConfig {
    /// Fetch daily images from remote providers (false = local image only)
    pub dynamic_images: bool,

    /// Search category sent to the image providers
    pub category: String,

    /// Bundled image used when every provider fails
    pub local_image_url: String,

    /// Unsplash client credential (falls back to UNSPLASH_ACCESS_KEY)
    pub unsplash_access_key: Option<String>,

    /// Pexels header credential (falls back to PEXELS_API_KEY)
    pub pexels_api_key: Option<String>,

    /// Override the Unsplash API base URL (proxies, testing)
    #[serde(default)]
    pub unsplash_api_base: Option<String>,

    /// Override the Pexels API base URL
    #[serde(default)]
    pub pexels_api_base: Option<String>,
}

impl Default for BackgroundsConfig {
    fn default() -> Self {
        Self {
            dynamic_images: true,
            category: "nature,landscape,mountains".to_string(),
            local_image_url: "assets/bg.jpeg".to_string(),
            unsplash_access_key: std::env::var("UNSPLASH_ACCESS_KEY").ok(),
            pexels_api_key: std::env::var("PEXELS_API_KEY").ok(),
            unsplash_api_base: None,
            pexels_api_base: None,
        }
    }
}

impl BackgroundsConfig {
    /// Effective Unsplash credential: config value, then environment.
    pub fn unsplash_key(&self) -> Option<String> {
        self.unsplash_access_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("UNSPLASH_ACCESS_KEY").ok().filter(|k| !k.is_empty()))
    }

    /// Effective Pexels credential: config value, then environment.
    pub fn pexels_key(&self) -> Option<String> {
        self.pexels_api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("PEXELS_API_KEY").ok().filter(|k| !k.is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeather credential (falls back to OPENWEATHER_API_KEY)
    pub api_key: Option<String>,

    /// Snapshot freshness window in minutes. Zero disables caching, so
    /// every render refetches.
    pub refresh_minutes: u32,

    /// Fixed device coordinates used when auto-location is on.
    /// Unset means no location source is available.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Override the OpenWeather API base URL
    #[serde(default)]
    pub api_base: Option<String>,

    /// Override the OpenWeather geocoding base URL
    #[serde(default)]
    pub geo_api_base: Option<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("OPENWEATHER_API_KEY").ok(),
            refresh_minutes: 10,
            latitude: None,
            longitude: None,
            api_base: None,
            geo_api_base: None,
        }
    }
}

impl WeatherConfig {
    /// Effective OpenWeather credential: config value, then environment.
    pub fn key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("OPENWEATHER_API_KEY").ok().filter(|k| !k.is_empty()))
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daystart");

        Self {
            config_dir,
            backgrounds: BackgroundsConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::NotFound(format!("{}: {}", config_path.display(), e))
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parse a configuration document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration and validate it, logging warnings.
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.backgrounds.category.trim().is_empty() {
            result.add_error("backgrounds.category", "Search category must not be empty");
        }
        if self.backgrounds.local_image_url.trim().is_empty() {
            result.add_error(
                "backgrounds.local_image_url",
                "Local fallback image must be set",
            );
        }
        if self.backgrounds.unsplash_key().is_none() && self.backgrounds.pexels_key().is_none() {
            result.add_warning(
                "backgrounds",
                "No image provider credentials configured - backgrounds fall back to the local image",
            );
        }

        if self.weather.key().is_none() {
            result.add_warning(
                "weather.api_key",
                "No weather credential configured - weather shows demo data",
            );
        }
        if self.weather.refresh_minutes == 0 {
            result.add_warning(
                "weather.refresh_minutes",
                "Weather caching disabled (0 minutes) - every render refetches",
            );
        }
        match (self.weather.latitude, self.weather.longitude) {
            (Some(lat), _) if !(-90.0..=90.0).contains(&lat) => {
                result.add_error("weather.latitude", "Latitude must be within -90..90");
            }
            (_, Some(lon)) if !(-180.0..=180.0).contains(&lon) => {
                result.add_error("weather.longitude", "Longitude must be within -180..180");
            }
            (Some(_), None) | (None, Some(_)) => {
                result.add_warning(
                    "weather",
                    "Only one of latitude/longitude set - location source disabled",
                );
            }
            _ => {}
        }

        for (field, value) in [
            ("backgrounds.unsplash_api_base", &self.backgrounds.unsplash_api_base),
            ("backgrounds.pexels_api_base", &self.backgrounds.pexels_api_base),
            ("weather.api_base", &self.weather.api_base),
            ("weather.geo_api_base", &self.weather.geo_api_base),
        ] {
            if let Some(base) = value {
                Self::validate_url(base, field, &mut result);
            }
        }

        result
    }

    /// Validate a URL field
    fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }
                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        std::fs::write(&config_path, contents)
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    /// Path of the preference store database.
    pub fn store_path(&self) -> PathBuf {
        self.config_dir.join("prefs.db")
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                ConfigError::NotFound("platform configuration directory unavailable".to_string())
            })?
            .join("daystart");

        Ok(config_dir.join("config.toml"))
    }
}
