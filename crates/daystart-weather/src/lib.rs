//! Current-conditions weather resolution.
//!
//! Resolves a location (device fix with bounded wait, or a configured
//! custom name over default coordinates), fetches current conditions from
//! OpenWeather, converts between unit systems, and caches the snapshot for
//! ten minutes. Total failure degrades to a fixed demo snapshot with a
//! visible error flag rather than an error state.

pub mod cache;
pub mod location;
pub mod openweather;
pub mod resolver;
pub mod types;
pub mod units;

pub use cache::{WeatherCache, WEATHER_TTL};
pub use location::{LocationError, LocationSource, StaticLocationSource, UnavailableLocationSource};
pub use openweather::{OpenWeatherClient, WeatherError};
pub use resolver::WeatherResolver;
pub use types::{
    demo_snapshot, weather_glyph, LocationFix, UnitSystem, WeatherPreferences, WeatherReport,
    WeatherSnapshot,
};
pub use units::convert;
