//! Spotify track, album, playlist and artist embeds.

use super::EmbedProvider;
use crate::error::Result;

/// Path segments that introduce an embeddable resource ID.
const RESOURCE_TYPES: [&str; 4] = ["track", "album", "playlist", "artist"];

/// Spotify embed provider.
pub struct SpotifyProvider;

impl EmbedProvider for SpotifyProvider {
    fn name(&self) -> &str {
        "Spotify"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("spotify.com")
            && RESOURCE_TYPES
                .iter()
                .any(|kind| url.contains(&format!("/{kind}/")))
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        let Some((kind, id)) = resource(url) else {
            return Ok(None);
        };
        let height = if kind == "track" { 80 } else { 380 };

        Ok(Some(format!(
            r#"<iframe src="https://open.spotify.com/embed/{kind}/{id}" width="300" height="{height}" frameborder="0" allowtransparency="true" allow="encrypted-media"></iframe>"#
        )))
    }
}

/// Find the first `<type>/<id>` segment pair, dropping any query from the ID.
fn resource(url: &str) -> Option<(&str, &str)> {
    let segments: Vec<&str> = url.split('/').collect();
    let (kind, id) = segments
        .windows(2)
        .find(|pair| RESOURCE_TYPES.contains(&pair[0]))
        .map(|pair| (pair[0], pair[1]))?;

    let id = id.split('?').next().unwrap_or_default();
    (!id.is_empty()).then_some((kind, id))
}
