//! Daystart: render one new-tab dashboard snapshot to the terminal.

use anyhow::Result;
use chrono::{Local, Timelike};
use std::sync::Arc;
use std::time::Duration;

use daystart_backgrounds::{BackgroundResolver, ImageProvider, PexelsProvider, UnsplashProvider};
use daystart_core::content::{daily_gradient, daily_quote, greeting_for_hour};
use daystart_core::store::PreferenceStore;
use daystart_core::{AppError, Config};
use daystart_weather::{
    weather_glyph, LocationSource, OpenWeatherClient, StaticLocationSource,
    UnavailableLocationSource, WeatherPreferences, WeatherResolver,
};

#[tokio::main]
async fn main() -> Result<()> {
    daystart_core::init()?;

    if let Err(e) = run().await {
        eprintln!("{}", e.user_message());
        return Err(e.into());
    }
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let (config, _validation) = Config::load_validated()?;
    let store = Arc::new(PreferenceStore::open(config.store_path())?);
    render(&config, store).await;
    Ok(())
}

async fn render(config: &Config, store: Arc<PreferenceStore>) {
    let now = Local::now();
    let today = now.date_naive();

    println!("{}", now.format("%H:%M"));
    if store.show_date() {
        println!("{}", now.format("%A, %B %-d, %Y"));
    }
    println!("{}, {}!", greeting_for_hour(now.hour()), store.user_name());

    if store.show_quote() {
        let quote = daily_quote(today);
        println!("\n\"{}\"\n  — {}", quote.text, quote.author);
    }

    let background = build_background_resolver(config, Arc::clone(&store));
    let image = background.resolve().await;
    if image.is_local() {
        println!("\nBackground: {} (gradient {})", image.url, daily_gradient(today));
    } else {
        println!("\nBackground: {}", image.url);
        println!("Photo by {} ({})", image.photographer, image.photographer_url);
    }

    match build_weather_resolver(config, Arc::clone(&store)) {
        Some(weather) => {
            let prefs = WeatherPreferences::load(&store);
            let report = weather.resolve(&prefs).await;
            let snap = &report.snapshot;

            if let Some(error) = &report.error {
                tracing::warn!("Weather degraded to demo data: {}", error);
                println!("\n⚠️  Weather unavailable, showing demo data");
            }
            println!(
                "\n{} {}{} in {} (feels like {}{}, humidity {}%, wind {} {})",
                weather_glyph(&snap.condition),
                snap.temperature,
                snap.units.temperature_suffix(),
                snap.location,
                snap.feels_like,
                snap.units.temperature_suffix(),
                snap.humidity,
                snap.wind_speed,
                snap.units.wind_suffix(),
            );
        }
        None => {
            tracing::info!("No weather credential configured, widget disabled");
        }
    }

    let links = store.quick_links();
    if !links.is_empty() {
        println!();
        for link in links {
            println!("  {} -> {}", link.name, link.url);
        }
    }
}

fn build_background_resolver(config: &Config, store: Arc<PreferenceStore>) -> BackgroundResolver {
    let mut providers: Vec<Box<dyn ImageProvider>> = Vec::new();

    if config.backgrounds.dynamic_images {
        if let Some(key) = config.backgrounds.unsplash_key() {
            let provider = match &config.backgrounds.unsplash_api_base {
                Some(base) => UnsplashProvider::with_base_url(key, base),
                None => UnsplashProvider::new(key),
            };
            match provider {
                Ok(p) => providers.push(Box::new(p)),
                Err(e) => tracing::warn!("Failed to build Unsplash provider: {}", e),
            }
        }
        if let Some(key) = config.backgrounds.pexels_key() {
            let provider = match &config.backgrounds.pexels_api_base {
                Some(base) => PexelsProvider::with_base_url(key, base),
                None => PexelsProvider::new(key),
            };
            match provider {
                Ok(p) => providers.push(Box::new(p)),
                Err(e) => tracing::warn!("Failed to build Pexels provider: {}", e),
            }
        }
    }

    BackgroundResolver::new(
        store,
        providers,
        config.backgrounds.category.clone(),
        config.backgrounds.local_image_url.clone(),
    )
}

fn build_weather_resolver(config: &Config, store: Arc<PreferenceStore>) -> Option<WeatherResolver> {
    let key = config.weather.key()?;

    let client = match OpenWeatherClient::with_overrides(
        key,
        config.weather.api_base.as_deref(),
        config.weather.geo_api_base.as_deref(),
    ) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to build weather client: {}", e);
            return None;
        }
    };

    let location: Arc<dyn LocationSource> =
        match (config.weather.latitude, config.weather.longitude) {
            (Some(lat), Some(lon)) => Arc::new(StaticLocationSource::new(lat, lon)),
            _ => Arc::new(UnavailableLocationSource),
        };

    let refresh_interval = Duration::from_secs(u64::from(config.weather.refresh_minutes) * 60);
    Some(WeatherResolver::with_refresh_interval(client, store, location, refresh_interval))
}
