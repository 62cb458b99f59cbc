//! Device location sources.
//!
//! A `LocationSource` yields raw coordinates; the resolver bounds the wait
//! and reverse-geocodes the result. Sources are injected so platforms (or
//! tests) can supply their own fix without touching resolution logic.

use async_trait::async_trait;
use std::time::Duration;

/// Bounded wait for a location fix before falling back.
pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Location service errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// Something that can produce the device's current coordinates.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Current latitude/longitude. May suspend while the platform waits for
    /// user permission; the resolver applies [`LOCATION_TIMEOUT`] around it.
    async fn current(&self) -> Result<(f64, f64), LocationError>;
}

/// Fixed coordinates, typically from configuration.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocationSource {
    latitude: f64,
    longitude: f64,
}

impl StaticLocationSource {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[async_trait]
impl LocationSource for StaticLocationSource {
    async fn current(&self) -> Result<(f64, f64), LocationError> {
        Ok((self.latitude, self.longitude))
    }
}

/// A source for platforms without any location service; always fails, which
/// routes the resolver to the default location.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocationSource;

#[async_trait]
impl LocationSource for UnavailableLocationSource {
    async fn current(&self) -> Result<(f64, f64), LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[tokio::test]
    async fn static_source_returns_its_fix() {
        let source = StaticLocationSource::new(48.8566, 2.3522);
        assert_eq!(source.current().await.unwrap(), (48.8566, 2.3522));
    }

    #[tokio::test]
    async fn unavailable_source_always_fails() {
        let source = UnavailableLocationSource;
        assert!(matches!(source.current().await, Err(LocationError::ServiceUnavailable)));
    }
}
