//! Daily background image resolution.
//!
//! Tries remote providers (Unsplash, then Pexels) for one landscape image per
//! calendar day, caches the winning descriptor under a day-ordinal key in the
//! preference store, and falls back to a bundled local image when every
//! provider fails. The caller never sees an error.

pub mod pexels;
pub mod provider;
pub mod resolver;
pub mod types;
pub mod unsplash;

pub use pexels::PexelsProvider;
pub use provider::ImageProvider;
pub use resolver::BackgroundResolver;
pub use types::{ImageDescriptor, ImageSource};
pub use unsplash::UnsplashProvider;
