//! Bluesky post cards.
//!
//! Bluesky has no embed endpoint that works from the URL alone, so posts are
//! rendered as a static card linking back to the post.

use std::sync::LazyLock;

use regex::Regex;

use super::EmbedProvider;
use crate::error::Result;

static POST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"bsky\.app/profile/([^/]+)/post/([^/]+)").unwrap());

/// Bluesky embed provider.
pub struct BlueskyProvider;

impl EmbedProvider for BlueskyProvider {
    fn name(&self) -> &str {
        "Bluesky"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("bsky.app")
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        if !url.starts_with("http") || !self.matches(url) {
            return Ok(None);
        }
        let Some(caps) = POST_PATH.captures(url) else {
            return Ok(None);
        };
        let (handle, post_id) = (&caps[1], &caps[2]);

        Ok(Some(format!(
            r#"<div class="bluesky-embed" style="border: 1px solid #e1e8ed; border-radius: 12px; padding: 16px; max-width: 550px; font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, 'Helvetica Neue', sans-serif;">
  <div style="display: flex; margin-bottom: 12px;">
    <div style="font-weight: bold; margin-right: 4px;">@{handle}</div>
    <div style="color: #657786;">on Bluesky</div>
  </div>
  <div style="margin-bottom: 12px;">
    Post ID: {post_id}
  </div>
  <a href="{url}" target="_blank" style="text-decoration: none; color: #1da1f2; display: block; margin-top: 8px;">View on Bluesky</a>
</div>"#
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_bsky_urls() {
        let provider = BlueskyProvider;
        assert_eq!(provider.name(), "Bluesky");
        assert!(provider.matches("https://bsky.app/profile/username.bsky.social/post/abcdef123456"));
        assert!(provider.matches("http://bsky.app/profile/user.bsky.social/post/xyz789"));
    }

    #[test]
    fn does_not_match_other_urls() {
        let provider = BlueskyProvider;
        assert!(!provider.matches("https://example.com"));
        assert!(!provider.matches("https://twitter.com/user/status/123456"));
    }

    #[test]
    fn renders_post_card() {
        let url = "https://bsky.app/profile/username.bsky.social/post/abcdef123456";
        let html = BlueskyProvider.embed(url).unwrap().unwrap();
        assert!(html.contains(r#"div class="bluesky-embed""#));
        assert!(html.contains("@username.bsky.social"));
        assert!(html.contains("Post ID: abcdef123456"));
        assert!(html.contains(&format!(r#"href="{url}""#)));
        assert!(html.contains("View on Bluesky"));
    }

    #[test]
    fn handles_other_handles() {
        let html = BlueskyProvider
            .embed("http://bsky.app/profile/user.bsky.social/post/xyz789")
            .unwrap()
            .unwrap();
        assert!(html.contains("@user.bsky.social"));
        assert!(html.contains("xyz789"));
    }

    #[test]
    fn no_embed_for_profiles_or_malformed_urls() {
        let provider = BlueskyProvider;
        assert_eq!(provider.embed("https://bsky.app/profile/username.bsky.social").unwrap(), None);
        assert_eq!(provider.embed("not-a-url").unwrap(), None);
        assert_eq!(provider.embed("bsky.app/profile/a/post/b").unwrap(), None);
    }
}
