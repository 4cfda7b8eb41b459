//! SoundCloud player embeds. The widget takes the public track, playlist
//! or profile URL directly, so no ID extraction is needed.

use super::EmbedProvider;
use crate::error::Result;

/// SoundCloud embed provider.
pub struct SoundCloudProvider;

impl EmbedProvider for SoundCloudProvider {
    fn name(&self) -> &str {
        "SoundCloud"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("soundcloud.com")
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        if !url.starts_with("http") || !self.matches(url) {
            return Ok(None);
        }

        let clean_url = url.split('?').next().unwrap_or(url);
        let encoded = urlencoding::encode(clean_url);

        Ok(Some(format!(
            r#"<iframe width="100%" height="166" scrolling="no" frameborder="no" allow="autoplay"
  src="https://w.soundcloud.com/player/?url={encoded}&color=%23ff5500&auto_play=false&hide_related=false&show_comments=true&show_user=true&show_reposts=false&show_teaser=true"></iframe>
<div style="font-size: 10px; color: #cccccc;line-break: anywhere;word-break: normal;overflow: hidden;white-space: nowrap;text-overflow: ellipsis; font-family: Interstate,Lucida Grande,Lucida Sans Unicode,Lucida Sans,Garuda,Verdana,Tahoma,sans-serif;font-weight: 100;">
  <a href="{clean_url}" title="Listen on SoundCloud" target="_blank" style="color: #cccccc; text-decoration: none;">SoundCloud</a>
</div>"#
        )))
    }
}
