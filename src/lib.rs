//! `embedurl` - turn links into embeddable HTML
//!
//! # Features
//!
//! - **Provider registry**: YouTube, Instagram, TikTok, Google Maps, Bing Maps,
//!   Spotify, OpenStreetMap, SoundCloud and Bluesky out of the box
//! - **Fault isolation**: a misbehaving provider is logged and skipped
//! - **Offline**: pure string parsing, no network access
//!
//! # Example
//!
//! ```rust
//! use embedurl::{EmbedConfig, EmbedRouter};
//!
//! let config = EmbedConfig::default().with_google_maps_api_key("my-key");
//! let router = EmbedRouter::with_config(&config);
//!
//! let result = router.resolve("https://www.google.com/maps/place/Empire+State+Building");
//! assert_eq!(result.sitename, "GoogleMaps");
//! assert!(result.embeddable.is_some());
//! ```

pub mod config;
pub mod embed;
pub mod error;

pub use config::{ConfigSource, EmbedConfig};
pub use embed::{EmbedProvider, EmbedResult, EmbedRouter};
pub use error::EmbedError;

/// Version of embedurl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
