use async_trait::async_trait;

use crate::types::ImageDescriptor;

/// A remote image source searchable by category.
///
/// Implementations swallow their own failures: any network error, non-success
/// status or empty result set is logged and surfaces as `None`, so the
/// resolver can simply walk its provider list in priority order.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &'static str;

    /// Search for one landscape image matching `category`.
    async fn search(&self, category: &str) -> Option<ImageDescriptor>;
}
