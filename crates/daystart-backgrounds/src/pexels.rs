//! Pexels search client. Secondary provider in the fallback chain.

use async_trait::async_trait;
use reqwest::header;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::provider::ImageProvider;
use crate::types::{ImageDescriptor, ImageSource, ATTRIBUTION_APP};

const PEXELS_API_URL: &str = "https://api.pexels.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct PexelsSearchResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    photographer: String,
    photographer_url: String,
    src: PexelsSrc,
}

#[derive(Debug, Deserialize)]
struct PexelsSrc {
    large: String,
}

/// Client for the Pexels search endpoint.
#[derive(Debug, Clone)]
pub struct PexelsProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PexelsProvider {
    /// Create a provider against the public Pexels API.
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_base_url(api_key, PEXELS_API_URL)
    }

    /// Create a provider against a custom base URL (proxies, tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl ImageProvider for PexelsProvider {
    fn name(&self) -> &'static str {
        "pexels"
    }

    async fn search(&self, category: &str) -> Option<ImageDescriptor> {
        let url = format!("{}/search", self.base_url);
        let response = match self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, &self.api_key)
            .query(&[
                ("query", category),
                ("orientation", "landscape"),
                ("size", "large"),
                ("per_page", "1"),
            ])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Pexels request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Pexels returned status {}", response.status());
            return None;
        }

        let body: PexelsSearchResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("Pexels parse error: {}", e);
                return None;
            }
        };

        let Some(photo) = body.photos.into_iter().next() else {
            tracing::warn!("Pexels returned no photos for '{}'", category);
            return None;
        };

        Some(ImageDescriptor {
            url: photo.src.large,
            photographer: photo.photographer,
            photographer_url: format!(
                "{}?utm_source={}&utm_medium=referral",
                photo.photographer_url, ATTRIBUTION_APP
            ),
            source_url: format!(
                "https://www.pexels.com/?utm_source={}&utm_medium=referral",
                ATTRIBUTION_APP
            ),
            source: ImageSource::Pexels,
            cached: true,
        })
    }
}
