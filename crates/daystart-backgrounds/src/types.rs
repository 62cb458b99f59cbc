use serde::{Deserialize, Serialize};

/// Referral tag appended to attribution links, per provider guidelines.
pub const ATTRIBUTION_APP: &str = "Daystart";

/// Where an image descriptor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Unsplash,
    Pexels,
    Local,
}

/// A resolved background image with attribution.
///
/// Invariant: `source == Local` exactly when `photographer` is empty and
/// `cached` is false; the bundled fallback is never written to the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
    pub photographer: String,
    pub photographer_url: String,
    pub source_url: String,
    pub source: ImageSource,
    pub cached: bool,
}

impl ImageDescriptor {
    /// Descriptor wrapping the bundled local fallback image.
    pub fn local(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            photographer: String::new(),
            photographer_url: String::new(),
            source_url: String::new(),
            source: ImageSource::Local,
            cached: false,
        }
    }

    /// True when this descriptor points at the bundled fallback.
    pub fn is_local(&self) -> bool {
        self.source == ImageSource::Local
    }
}
