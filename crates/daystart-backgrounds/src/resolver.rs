//! Per-day background resolution with provider fallback and caching.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use daystart_core::daily::day_ordinal;
use daystart_core::store::PreferenceStore;

use crate::provider::ImageProvider;
use crate::types::ImageDescriptor;

const CACHE_KEY_PREFIX: &str = "daily-bg-";

fn cache_key(ordinal: u32) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, ordinal)
}

/// Resolves today's background image.
///
/// Providers are tried in the order given; every failure falls through to the
/// next tier and total exhaustion yields the local fallback descriptor.
/// Successful remote resolutions are cached for the rest of the day. Two
/// racing resolutions may both hit the network and last-write-wins the cache
/// key; both results are valid images for the day.
pub struct BackgroundResolver {
    store: Arc<PreferenceStore>,
    providers: Vec<Box<dyn ImageProvider>>,
    category: String,
    local_image_url: String,
}

impl BackgroundResolver {
    /// Build a resolver. An empty provider list disables remote images
    /// entirely (the resolver then always yields the local fallback).
    pub fn new(
        store: Arc<PreferenceStore>,
        providers: Vec<Box<dyn ImageProvider>>,
        category: impl Into<String>,
        local_image_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            providers,
            category: category.into(),
            local_image_url: local_image_url.into(),
        }
    }

    /// Resolve today's background.
    pub async fn resolve(&self) -> ImageDescriptor {
        self.resolve_for(Local::now().date_naive()).await
    }

    /// Resolve for an explicit calendar day (deterministic variant).
    pub async fn resolve_for(&self, today: NaiveDate) -> ImageDescriptor {
        let key = cache_key(day_ordinal(today));

        if let Some(cached) = self.store.get_opt::<ImageDescriptor>(&key) {
            tracing::debug!("Serving cached background for key {}", key);
            return cached;
        }

        for provider in &self.providers {
            if let Some(descriptor) = provider.search(&self.category).await {
                tracing::info!("Resolved background via {}", provider.name());
                if let Err(e) = self.store.set(&key, &descriptor) {
                    tracing::warn!("Failed to cache background: {}", e);
                }
                self.sweep_stale(&key);
                return descriptor;
            }
            tracing::warn!("Provider {} failed, trying next tier", provider.name());
        }

        tracing::info!("All providers exhausted, using local fallback");
        ImageDescriptor::local(&self.local_image_url)
    }

    /// Delete today's cache entry and resolve again.
    pub async fn refresh(&self) -> ImageDescriptor {
        self.refresh_for(Local::now().date_naive()).await
    }

    /// Refresh for an explicit calendar day (deterministic variant).
    pub async fn refresh_for(&self, today: NaiveDate) -> ImageDescriptor {
        let key = cache_key(day_ordinal(today));
        if let Err(e) = self.store.remove(&key) {
            tracing::warn!("Failed to clear background cache: {}", e);
        }
        self.resolve_for(today).await
    }

    /// Drop entries from previous days; only `keep` stays.
    fn sweep_stale(&self, keep: &str) {
        let keys = match self.store.keys_with_prefix(CACHE_KEY_PREFIX) {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("Background cache sweep failed: {}", e);
                return;
            }
        };

        for key in keys.iter().filter(|k| k.as_str() != keep) {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!("Failed to drop stale background '{}': {}", key, e);
            }
        }
    }
}
