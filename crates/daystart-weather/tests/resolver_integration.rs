//! Integration tests for weather resolution against a mock provider.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use daystart_core::store::PreferenceStore;
use daystart_weather::{
    demo_snapshot, OpenWeatherClient, StaticLocationSource, UnavailableLocationSource, UnitSystem,
    WeatherPreferences, WeatherResolver,
};

fn current_body(temp: f64) -> serde_json::Value {
    serde_json::json!({
        "main": { "temp": temp, "feels_like": temp + 2.1, "humidity": 63 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "wind": { "speed": 4.6, "deg": 220 }
    })
}

fn geo_body(name: &str, country: &str) -> serde_json::Value {
    serde_json::json!([{ "name": name, "country": country, "lat": 47.37, "lon": 8.54 }])
}

fn client_against(server_uri: &str) -> OpenWeatherClient {
    OpenWeatherClient::with_base_urls("owm-key", server_uri, format!("{}/geo", server_uri)).unwrap()
}

fn resolver_with_static_fix(server_uri: &str, store: Arc<PreferenceStore>) -> WeatherResolver {
    WeatherResolver::new(
        client_against(server_uri),
        store,
        Arc::new(StaticLocationSource::new(47.3769, 8.5417)),
    )
}

#[tokio::test]
async fn auto_location_fetch_with_reverse_geocode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/reverse"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_body("Zurich", "CH")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "owm-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(13.4)))
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = resolver_with_static_fix(&server.uri(), store);

    let report = resolver.resolve_at(&WeatherPreferences::default(), 0).await;
    assert!(report.error.is_none());

    let snap = report.snapshot;
    assert_eq!(snap.location, "Zurich");
    assert_eq!(snap.country, "CH");
    assert_eq!(snap.temperature, 13.0);
    assert_eq!(snap.feels_like, 16.0);
    assert_eq!(snap.humidity, 63);
    assert_eq!(snap.wind_speed, 4.6);
    assert_eq!(snap.condition, "Rain");
    assert_eq!(snap.icon, "10d");
    assert_eq!(snap.units, UnitSystem::Metric);
}

#[tokio::test]
async fn geocode_failure_keeps_coordinates_with_generic_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/reverse"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(13.4)))
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = resolver_with_static_fix(&server.uri(), store);

    let report = resolver.resolve_at(&WeatherPreferences::default(), 0).await;
    assert_eq!(report.snapshot.location, "Current Location");
    assert_eq!(report.snapshot.country, "");
}

#[tokio::test]
async fn unavailable_location_falls_back_to_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "37.7749"))
        .and(query_param("lon", "-122.4194"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(18.0)))
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = WeatherResolver::new(
        client_against(&server.uri()),
        store,
        Arc::new(UnavailableLocationSource),
    );

    let report = resolver.resolve_at(&WeatherPreferences::default(), 0).await;
    assert!(report.error.is_none());
    assert_eq!(report.snapshot.location, "San Francisco");
    assert_eq!(report.snapshot.country, "US");
}

#[tokio::test]
async fn custom_location_is_display_only() {
    // The custom name must not be geocoded; the default coordinates are used
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "37.7749"))
        .and(query_param("lon", "-122.4194"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(18.0)))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = WeatherResolver::new(
        client_against(&server.uri()),
        store,
        Arc::new(UnavailableLocationSource),
    );

    let prefs = WeatherPreferences {
        units: UnitSystem::Metric,
        auto_location: false,
        custom_location: Some("Paris".to_string()),
    };
    let report = resolver.resolve_at(&prefs, 0).await;
    assert_eq!(report.snapshot.location, "Paris");
    assert_eq!(report.snapshot.country, "US");
}

#[tokio::test]
async fn fetch_failure_serves_demo_data_with_error_flag() {
    // Preferences: metric, manual location "Paris", provider down
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = WeatherResolver::new(
        client_against(&server.uri()),
        store,
        Arc::new(UnavailableLocationSource),
    );

    let prefs = WeatherPreferences {
        units: UnitSystem::Metric,
        auto_location: false,
        custom_location: Some("Paris".to_string()),
    };
    let report = resolver.resolve_at(&prefs, 0).await;

    // Demo constants come back exactly as defined, no conversion applied
    assert_eq!(report.snapshot, demo_snapshot());
    assert!(report.error.is_some());
}

#[tokio::test]
async fn cache_served_at_nine_minutes_refetched_at_eleven() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_body("Zurich", "CH")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(13.4)))
        .expect(2)
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = resolver_with_static_fix(&server.uri(), store);
    let prefs = WeatherPreferences::default();

    let first = resolver.resolve_at(&prefs, 0).await;

    // Nine minutes in: cached snapshot served unchanged, no second call yet
    let nine_min = 9 * 60 * 1000;
    let cached = resolver.resolve_at(&prefs, nine_min).await;
    assert_eq!(cached.snapshot, first.snapshot);

    // Eleven minutes in: entry expired, resolution runs again
    let eleven_min = 11 * 60 * 1000;
    let refetched = resolver.resolve_at(&prefs, eleven_min).await;
    assert_eq!(refetched.snapshot, first.snapshot);
}

#[tokio::test]
async fn refresh_drops_cache_and_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_body("Zurich", "CH")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(13.4)))
        .expect(2)
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = resolver_with_static_fix(&server.uri(), store);
    let prefs = WeatherPreferences::default();

    resolver.resolve_at(&prefs, 0).await;
    // One minute in the entry is well within its window, yet refresh
    // drops it and fetches again
    resolver.refresh_at(&prefs, 60_000).await;
}

#[tokio::test]
async fn configured_refresh_interval_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geo_body("Zurich", "CH")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(13.4)))
        .expect(2)
        .mount(&server)
        .await;

    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = WeatherResolver::with_refresh_interval(
        client_against(&server.uri()),
        store,
        Arc::new(StaticLocationSource::new(47.3769, 8.5417)),
        Duration::from_secs(60),
    );
    let prefs = WeatherPreferences::default();

    resolver.resolve_at(&prefs, 0).await;
    // Two minutes in: expired under the one-minute window, well within
    // the ten-minute default
    resolver.resolve_at(&prefs, 2 * 60_000).await;
}

#[tokio::test]
async fn apply_units_converts_and_recaches() {
    let store = Arc::new(PreferenceStore::in_memory().unwrap());
    let resolver = WeatherResolver::new(
        client_against("http://127.0.0.1:9"),
        Arc::clone(&store),
        Arc::new(UnavailableLocationSource),
    );

    let metric = demo_snapshot();
    let imperial = resolver.apply_units(&metric, UnitSystem::Imperial);
    assert_eq!(imperial.units, UnitSystem::Imperial);
    assert_eq!(imperial.temperature, 72.0);

    // The converted snapshot is what the cache now serves
    let prefs = WeatherPreferences::default();
    let report = resolver.resolve(&prefs).await;
    assert_eq!(report.snapshot, imperial);
}
