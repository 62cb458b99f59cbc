//! Unsplash random-photo client. Primary provider in the fallback chain.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::provider::ImageProvider;
use crate::types::{ImageDescriptor, ImageSource, ATTRIBUTION_APP};

const UNSPLASH_API_URL: &str = "https://api.unsplash.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    urls: UnsplashUrls,
    user: UnsplashUser,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct UnsplashUser {
    name: String,
    username: String,
}

/// Client for the Unsplash random-photo endpoint.
#[derive(Debug, Clone)]
pub struct UnsplashProvider {
    client: Client,
    base_url: String,
    access_key: String,
}

impl UnsplashProvider {
    /// Create a provider against the public Unsplash API.
    pub fn new(access_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_base_url(access_key, UNSPLASH_API_URL)
    }

    /// Create a provider against a custom base URL (proxies, tests).
    pub fn with_base_url(
        access_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        })
    }
}

#[async_trait]
impl ImageProvider for UnsplashProvider {
    fn name(&self) -> &'static str {
        "unsplash"
    }

    async fn search(&self, category: &str) -> Option<ImageDescriptor> {
        let url = format!("{}/photos/random", self.base_url);
        let response = match self
            .client
            .get(&url)
            .query(&[
                ("client_id", self.access_key.as_str()),
                ("orientation", "landscape"),
                ("w", "1920"),
                ("h", "1080"),
                ("query", category),
            ])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Unsplash request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Unsplash returned status {}", response.status());
            return None;
        }

        let photo: UnsplashPhoto = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Unsplash parse error: {}", e);
                return None;
            }
        };

        Some(ImageDescriptor {
            url: photo.urls.regular,
            photographer: photo.user.name,
            photographer_url: format!(
                "https://unsplash.com/@{}?utm_source={}&utm_medium=referral",
                photo.user.username, ATTRIBUTION_APP
            ),
            source_url: format!(
                "https://unsplash.com?utm_source={}&utm_medium=referral",
                ATTRIBUTION_APP
            ),
            source: ImageSource::Unsplash,
            cached: true,
        })
    }
}
