pub mod config;
pub mod content;
pub mod daily;
pub mod error;
pub mod prefs;
pub mod store;

pub use config::Config;
pub use content::Quote;
pub use daily::{day_ordinal, pick};
pub use error::{AppError, ConfigError, StoreError};
pub use prefs::QuickLink;
pub use store::{CacheEntry, PreferenceStore};

use anyhow::Result;

/// Initialize the core: logging first, everything else follows.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Daystart core initialized");
    Ok(())
}
