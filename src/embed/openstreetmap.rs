//! OpenStreetMap embeds built from the `#map=<zoom>/<lat>/<lon>` fragment.

use std::sync::LazyLock;

use regex::Regex;

use super::EmbedProvider;
use crate::error::Result;

static MAP_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#map=([0-9]+)/([^/]+)/([^/&#]+)").unwrap());

/// Half-width of the bounding box around the marker, in degrees.
const BBOX_MARGIN: f64 = 0.01;

/// OpenStreetMap embed provider.
pub struct OpenStreetMapProvider;

impl EmbedProvider for OpenStreetMapProvider {
    fn name(&self) -> &str {
        "OpenStreetMap"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("openstreetmap.org")
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        if !url.starts_with("http") {
            return Ok(None);
        }
        let Some(caps) = MAP_FRAGMENT.captures(url) else {
            return Ok(None);
        };
        let (lat, lon) = (&caps[2], &caps[3]);
        let (Ok(lat_deg), Ok(lon_deg)) = (lat.parse::<f64>(), lon.parse::<f64>()) else {
            tracing::debug!("Non-numeric OpenStreetMap coordinates in {}", url);
            return Ok(None);
        };

        let bbox = format!(
            "{},{},{},{}",
            lon_deg - BBOX_MARGIN,
            lat_deg - BBOX_MARGIN,
            lon_deg + BBOX_MARGIN,
            lat_deg + BBOX_MARGIN
        );

        Ok(Some(format!(
            r#"<iframe width="600" height="450" frameborder="0" scrolling="no" marginheight="0" marginwidth="0"
  src="https://www.openstreetmap.org/export/embed.html?bbox={bbox}&amp;layer=mapnik&amp;marker={lat},{lon}"
  style="border: 1px solid black"></iframe>
<br/>
<small><a href="{url}" target="_blank">View Larger Map</a></small>"#
        )))
    }
}
