//! YouTube video embeds.
//!
//! Handles `youtube.com/watch?v=<id>`, `youtu.be/<id>` and
//! `youtube.com/embed/<id>` URLs.
//!
//! # Example
//!
//! ```rust
//! use embedurl::embed::{EmbedProvider, youtube::YouTubeProvider};
//!
//! let html = YouTubeProvider
//!     .embed("https://youtu.be/dQw4w9WgXcQ")
//!     .unwrap()
//!     .unwrap();
//! assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::EmbedProvider;
use crate::error::Result;

static WATCH_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?&]v=([^&#]*)").unwrap());
static SHORT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"youtu\.be/([^?&#]*)").unwrap());
static EMBED_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"embed/([^?&#]*)").unwrap());

/// YouTube embed provider.
pub struct YouTubeProvider;

impl EmbedProvider for YouTubeProvider {
    fn name(&self) -> &str {
        "YouTube"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("youtube.com") || url.contains("youtu.be")
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        Ok(video_id(url).map(|id| {
            format!(
                r#"<iframe width="560" height="315" src="https://www.youtube.com/embed/{id}" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#
            )
        }))
    }
}

/// Extract the video ID. The URL shape decides which pattern applies.
fn video_id(url: &str) -> Option<&str> {
    let pattern = if url.contains("youtube.com/watch") {
        &*WATCH_ID
    } else if url.contains("youtu.be") {
        &*SHORT_ID
    } else if url.contains("youtube.com/embed") {
        &*EMBED_ID
    } else {
        return None;
    };

    pattern
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|id| !id.is_empty())
}
