//! URL to embeddable HTML conversion.
//!
//! # Architecture
//!
//! - [`EmbedProvider`]: recognizes URLs of one platform and renders its embed
//! - [`EmbedRouter`]: dispatches URLs to the first provider that claims them
//! - [`EmbedResult`]: the embed (if any) plus the name of the provider that handled it
//!
//! # Example
//!
//! ```rust
//! use embedurl::embed::EmbedRouter;
//!
//! let router = EmbedRouter::new();
//! let result = router.resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
//!
//! assert_eq!(result.sitename, "YouTube");
//! assert!(result.embeddable.unwrap().contains("youtube.com/embed/dQw4w9WgXcQ"));
//! ```

pub mod bing_maps;
pub mod bluesky;
pub mod google_maps;
pub mod instagram;
pub mod openstreetmap;
pub mod soundcloud;
pub mod spotify;
pub mod tiktok;
pub mod youtube;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::config::EmbedConfig;
use crate::error::Result;

/// Site name reported when no provider handled a URL.
pub const UNKNOWN_SITE: &str = "Unknown";

/// Outcome of resolving a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedResult {
    /// HTML fragment to render inline, `None` when no embed could be built.
    pub embeddable: Option<String>,
    /// Name of the provider that claimed the URL, or `"Unknown"`.
    pub sitename: String,
    /// The URL exactly as supplied.
    pub url: String,
}

impl EmbedResult {
    fn unknown(url: &str) -> Self {
        Self {
            embeddable: None,
            sitename: UNKNOWN_SITE.to_string(),
            url: url.to_string(),
        }
    }

    /// Whether a provider claimed the URL (even if it produced no embed).
    pub fn is_known(&self) -> bool {
        self.sitename != UNKNOWN_SITE
    }
}

/// Renders embeds for one platform.
pub trait EmbedProvider: Send + Sync {
    /// Provider name, unique within a router (e.g. `"YouTube"`).
    fn name(&self) -> &str;

    /// Check if this provider handles the given URL.
    fn matches(&self, url: &str) -> bool;

    /// Build the embed HTML. `Ok(None)` means the URL was recognized but the
    /// identifiers needed for an embed could not be extracted.
    fn embed(&self, url: &str) -> Result<Option<String>>;
}

/// Routes URLs to embed providers.
///
/// Providers are checked in registration order. First match wins, even if
/// that provider then fails to build an embed. A provider that errors or
/// panics is logged and skipped.
pub struct EmbedRouter {
    providers: Vec<Box<dyn EmbedProvider>>,
}

impl EmbedRouter {
    /// Create a router with all built-in providers and no API keys.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EmbedConfig::default())
    }

    /// Create a router with all built-in providers configured from `config`.
    #[must_use]
    pub fn with_config(config: &EmbedConfig) -> Self {
        let providers: Vec<Box<dyn EmbedProvider>> = vec![
            Box::new(youtube::YouTubeProvider),
            Box::new(instagram::InstagramProvider),
            Box::new(tiktok::TikTokProvider),
            Box::new(google_maps::GoogleMapsProvider::from_source(config)),
            Box::new(bing_maps::BingMapsProvider),
            Box::new(spotify::SpotifyProvider),
            Box::new(openstreetmap::OpenStreetMapProvider),
            Box::new(soundcloud::SoundCloudProvider),
            Box::new(bluesky::BlueskyProvider),
        ];

        Self { providers }
    }

    /// Create a router with no providers.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register a provider. A provider with the same name is replaced in
    /// place, keeping its position in the trial order.
    pub fn register(&mut self, provider: Box<dyn EmbedProvider>) {
        if let Some(slot) = self
            .providers
            .iter_mut()
            .find(|p| p.name() == provider.name())
        {
            tracing::debug!("Replacing embed provider: {}", provider.name());
            *slot = provider;
        } else {
            self.providers.push(provider);
        }
    }

    /// Look up a provider by name.
    pub fn get(&self, name: &str) -> Option<&dyn EmbedProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(AsRef::as_ref)
    }

    /// Provider names in trial order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolve a URL to an embed.
    ///
    /// Never fails: unrecognized URLs, and URLs whose every candidate
    /// provider faulted, come back with `sitename == "Unknown"`.
    pub fn resolve(&self, url: &str) -> EmbedResult {
        if url.is_empty() {
            return EmbedResult::unknown(url);
        }

        for provider in &self.providers {
            match attempt(provider.as_ref(), url) {
                Attempt::Declined => {}
                Attempt::Claimed(embeddable) => {
                    tracing::debug!("Matched embed provider: {}", provider.name());
                    if embeddable.is_none() {
                        tracing::debug!("{} could not build an embed for {}", provider.name(), url);
                    }
                    return EmbedResult {
                        embeddable,
                        sitename: provider.name().to_string(),
                        url: url.to_string(),
                    };
                }
                Attempt::Faulted(reason) => {
                    tracing::warn!("Embed provider {} failed for {}: {}", provider.name(), url, reason);
                }
            }
        }

        EmbedResult::unknown(url)
    }

    /// Resolve an optional URL; `None` is treated like an empty string.
    pub fn resolve_opt(&self, url: Option<&str>) -> EmbedResult {
        self.resolve(url.unwrap_or_default())
    }
}

impl Default for EmbedRouter {
    fn default() -> Self {
        Self::new()
    }
}

enum Attempt {
    Declined,
    Claimed(Option<String>),
    Faulted(String),
}

/// Run one provider against `url`, isolating errors and panics.
fn attempt(provider: &dyn EmbedProvider, url: &str) -> Attempt {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        if provider.matches(url) {
            provider.embed(url).map(Some)
        } else {
            Ok(None)
        }
    }));

    match outcome {
        Ok(Ok(Some(embeddable))) => Attempt::Claimed(embeddable),
        Ok(Ok(None)) => Attempt::Declined,
        Ok(Err(e)) => Attempt::Faulted(e.to_string()),
        Err(payload) => Attempt::Faulted(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic".to_string()
    }
}
