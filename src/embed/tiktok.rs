//! TikTok video embeds.
//!
//! Only canonical `tiktok.com/@user/video/<id>` links can be embedded;
//! `vm.tiktok.com` short links are recognized but yield no embed since
//! resolving them needs a network round trip.

use std::sync::LazyLock;

use regex::Regex;

use super::EmbedProvider;
use crate::error::Result;

static VIDEO_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tiktok\.com/(@[^/]+)/video/([^/?&#]*)").unwrap());

/// TikTok embed provider.
pub struct TikTokProvider;

impl EmbedProvider for TikTokProvider {
    fn name(&self) -> &str {
        "TikTok"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("tiktok.com")
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        let Some(caps) = VIDEO_PATH.captures(url) else {
            return Ok(None);
        };
        let (username, video_id) = (&caps[1], &caps[2]);
        // Claimed but empty `/video/`: no embed, and no fallback to another provider.
        if video_id.is_empty() {
            return Ok(None);
        }

        Ok(Some(format!(
            r#"<blockquote class="tiktok-embed" cite="https://www.tiktok.com/{username}/video/{video_id}" data-video-id="{video_id}">
  <section></section>
</blockquote>
<script async src="https://www.tiktok.com/embed.js"></script>"#
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_tiktok_urls() {
        let provider = TikTokProvider;
        assert!(provider.matches("https://www.tiktok.com/@username/video/1234567890"));
        assert!(provider.matches("https://tiktok.com/@username/video/1234567890"));
        assert!(provider.matches("https://www.tiktok.com/@username/video/1234567890?is_copy_url=1"));
        assert!(provider.matches("https://vm.tiktok.com/ABCDEF/"));
    }

    #[test]
    fn does_not_match_other_sites() {
        let provider = TikTokProvider;
        assert!(!provider.matches("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!provider.matches("https://www.ticfacetok.com/username"));
    }

    #[test]
    fn embeds_video() {
        let html = TikTokProvider
            .embed("https://www.tiktok.com/@username/video/1234567890?is_copy_url=1")
            .unwrap()
            .unwrap();
        assert!(html.contains(r#"blockquote class="tiktok-embed""#));
        assert!(html.contains(r#"cite="https://www.tiktok.com/@username/video/1234567890""#));
        assert!(html.contains(r#"data-video-id="1234567890""#));
        assert!(html.contains(r#"src="https://www.tiktok.com/embed.js""#));
    }

    #[test]
    fn short_links_are_not_embedded() {
        assert_eq!(TikTokProvider.embed("https://vm.tiktok.com/ABCDEF/").unwrap(), None);
    }

    #[test]
    fn malformed_paths_are_not_embedded() {
        let provider = TikTokProvider;
        assert_eq!(provider.embed("https://www.tiktok.com/!@username").unwrap(), None);
        assert_eq!(provider.embed("https://www.tiktok.com/@username/video/").unwrap(), None);
    }
}
