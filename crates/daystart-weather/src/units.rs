//! Unit conversion between metric and imperial snapshots.

use crate::types::{UnitSystem, WeatherSnapshot};

const MS_TO_MPH: f64 = 2.237;
const MPH_TO_MS: f64 = 0.44704;

fn round_whole(value: f64) -> f64 {
    value.round()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a snapshot to the target unit system.
///
/// Pure function, no network. A no-op when the tags already match.
/// Temperatures round to the nearest whole display unit and wind speed to
/// one decimal, so converting back and forth is lossy within rounding
/// tolerance; the unit tag and the values always change together.
pub fn convert(snapshot: &WeatherSnapshot, target: UnitSystem) -> WeatherSnapshot {
    if snapshot.units == target {
        return snapshot.clone();
    }

    let mut converted = snapshot.clone();
    match target {
        UnitSystem::Metric => {
            converted.temperature = round_whole((snapshot.temperature - 32.0) * 5.0 / 9.0);
            converted.feels_like = round_whole((snapshot.feels_like - 32.0) * 5.0 / 9.0);
            converted.wind_speed = round_tenth(snapshot.wind_speed * MPH_TO_MS);
        }
        UnitSystem::Imperial => {
            converted.temperature = round_whole(snapshot.temperature * 9.0 / 5.0 + 32.0);
            converted.feels_like = round_whole(snapshot.feels_like * 9.0 / 5.0 + 32.0);
            converted.wind_speed = round_tenth(snapshot.wind_speed * MS_TO_MPH);
        }
    }
    converted.units = target;
    converted
}
