//! Instagram post and reel embeds.
//!
//! Reels are embedded through the same `/p/<code>/` permalink as posts.

use std::sync::LazyLock;

use regex::Regex;

use super::EmbedProvider;
use crate::error::Result;

static POST_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/(?:p|reel)/([^/?&#]*)").unwrap());

/// Instagram embed provider.
pub struct InstagramProvider;

impl EmbedProvider for InstagramProvider {
    fn name(&self) -> &str {
        "Instagram"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("instagram.com/p/") || url.contains("instagram.com/reel/")
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        let Some(code) = POST_CODE
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            // `/p/` with nothing after it is still claimed, just not embedded
            .filter(|code| !code.is_empty())
        else {
            return Ok(None);
        };

        let permalink = format!("https://www.instagram.com/p/{code}/");
        Ok(Some(format!(
            r#"<blockquote class="instagram-media" data-instgrm-permalink="{permalink}" data-instgrm-version="14">
  <div style="padding:16px;">
    <a href="{permalink}" style="background:#FFFFFF; line-height:0; padding:0 0; text-align:center; text-decoration:none; width:100%;" target="_blank">
    </a>
  </div>
</blockquote>
<script async src="//www.instagram.com/embed.js"></script>"#
        )))
    }
}
