//! Google Maps embeds via the Maps Embed API.
//!
//! Three URL shapes are understood, tried in this order:
//!
//! - `…/maps/@<lat>,<lng>,<zoom>z` ⇒ `view` mode (zoom floored to an integer)
//! - `…/maps/place/<name>` ⇒ `place` mode
//! - `…/maps/dir/<origin>/<destination>` ⇒ `directions` mode
//!
//! The Embed API requires a key, so without one every URL is recognized but
//! none is embedded.

use std::sync::LazyLock;

use regex::Regex;

use super::EmbedProvider;
use crate::config::{ConfigSource, GOOGLE_MAPS_API_KEY};
use crate::error::{EmbedError, Result};

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
static CENTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+),([0-9]+\.?[0-9]*)z").unwrap()
});
static PLACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/place/([^/]+)").unwrap());
static DIRECTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dir/([^/]+)/([^/]+)").unwrap());

const EMBED_BASE: &str = "https://www.google.com/maps/embed/v1";

/// Google Maps embed provider.
pub struct GoogleMapsProvider {
    api_key: Option<String>,
}

impl GoogleMapsProvider {
    /// Create a provider with an explicit API key. Empty keys count as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Create a provider reading `GOOGLE_MAPS_API_KEY` from `source`.
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self::new(source.get(GOOGLE_MAPS_API_KEY))
    }

    fn embed_src(&self, key: &str, url: &str) -> Result<Option<String>> {
        if let Some(caps) = CENTER.captures(url) {
            let zoom = parse_zoom(&caps[3])?;
            return Ok(Some(format!(
                "{EMBED_BASE}/view?key={key}&center={},{}&zoom={zoom}",
                &caps[1], &caps[2]
            )));
        }

        if url.contains("/place/") {
            return Ok(PLACE.captures(url).map(|caps| {
                format!(
                    "{EMBED_BASE}/place?key={key}&q={}",
                    urlencoding::encode(&spaced(&caps[1]))
                )
            }));
        }

        if url.contains("/dir/") {
            return Ok(DIRECTIONS.captures(url).map(|caps| {
                format!(
                    "{EMBED_BASE}/directions?key={key}&origin={}&destination={}",
                    urlencoding::encode(&spaced(&caps[1])),
                    urlencoding::encode(&spaced(&caps[2]))
                )
            }));
        }

        Ok(None)
    }
}

impl EmbedProvider for GoogleMapsProvider {
    fn name(&self) -> &str {
        "GoogleMaps"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("google.com/maps")
    }

    fn embed(&self, url: &str) -> Result<Option<String>> {
        let Some(key) = self.api_key.as_deref() else {
            tracing::debug!("No Google Maps API key configured, skipping embed");
            return Ok(None);
        };

        Ok(self.embed_src(key, url)?.map(|src| {
            format!(
                r#"<iframe width="600" height="450" style="border:0;" loading="lazy" allowfullscreen src="{src}"></iframe>"#
            )
        }))
    }
}

/// Floor a decimal zoom like `15.75` to `15`.
fn parse_zoom(raw: &str) -> Result<i64> {
    let zoom: f64 = raw.parse().map_err(|source| EmbedError::InvalidNumber {
        value: raw.to_string(),
        source,
    })?;
    #[allow(clippy::cast_possible_truncation)]
    let zoom = zoom.floor() as i64;
    Ok(zoom)
}

/// Turn `+` and `%20` separators back into spaces.
fn spaced(segment: &str) -> String {
    segment.replace('+', " ").replace("%20", " ")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::EmbedConfig;

    fn provider() -> GoogleMapsProvider {
        GoogleMapsProvider::new(Some("test-api-key".to_string()))
    }

    #[test]
    fn matches_google_maps_urls() {
        let provider = provider();
        assert!(provider.matches("https://www.google.com/maps/@37.7749,-122.4194,12z"));
        assert!(provider.matches("https://google.com/maps/place/Empire+State+Building"));
        assert!(provider.matches("https://www.google.com/maps/dir/New+York/Los+Angeles"));
    }

    #[test]
    fn does_not_match_other_urls() {
        let provider = provider();
        assert!(!provider.matches("https://www.bing.com/maps?q=New+York"));
        assert!(!provider.matches("https://maps.google.com"));
        assert!(!provider.matches("https://www.google.com/search?q=maps"));
    }

    #[test]
    fn embeds_coordinates_view() {
        let html = provider()
            .embed("https://www.google.com/maps/@37.7749,-122.4194,12z")
            .unwrap()
            .unwrap();
        assert!(html.contains("<iframe"));
        assert!(html.contains(r#"width="600" height="450""#));
        assert!(html.contains("https://www.google.com/maps/embed/v1/view"));
        assert!(html.contains("key=test-api-key"));
        assert!(html.contains("center=37.7749,-122.4194"));
        assert!(html.contains("zoom=12"));
    }

    #[test]
    fn floors_decimal_zoom() {
        let html = provider()
            .embed("https://www.google.com/maps/@40.7128,-74.0060,15.75z")
            .unwrap()
            .unwrap();
        assert!(html.contains("zoom=15"));
        assert!(!html.contains("zoom=15.75"));
    }

    #[test]
    fn embeds_place() {
        let html = provider()
            .embed("https://www.google.com/maps/place/Empire+State+Building")
            .unwrap()
            .unwrap();
        assert!(html.contains("https://www.google.com/maps/embed/v1/place"));
        assert!(html.contains("key=test-api-key"));
        assert!(html.contains("q=Empire%20State%20Building"));
    }

    #[test]
    fn encodes_place_names() {
        let html = provider()
            .embed("https://www.google.com/maps/place/Times Square, New York")
            .unwrap()
            .unwrap();
        assert!(html.contains("q=Times%20Square%2C%20New%20York"));

        let html = provider()
            .embed("https://www.google.com/maps/place/Times%20Square/data=xyz")
            .unwrap()
            .unwrap();
        assert!(html.contains(r#"q=Times%20Square""#), "{html}");
        assert!(!html.contains("%2520"));
    }

    #[test]
    fn embeds_directions() {
        let html = provider()
            .embed("https://www.google.com/maps/dir/New York/Los+Angeles")
            .unwrap()
            .unwrap();
        assert!(html.contains("https://www.google.com/maps/embed/v1/directions"));
        assert!(html.contains("key=test-api-key"));
        assert!(html.contains("origin=New%20York"));
        assert!(html.contains("destination=Los%20Angeles"));
    }

    #[test]
    fn coordinates_take_precedence_over_place() {
        let html = provider()
            .embed("https://www.google.com/maps/place/Eiffel+Tower/@48.8584,2.2945,17z")
            .unwrap()
            .unwrap();
        assert!(html.contains("/embed/v1/view"));
        assert!(html.contains("zoom=17"));
    }

    #[test]
    fn incomplete_directions_are_not_embedded() {
        assert_eq!(provider().embed("https://www.google.com/maps/dir/").unwrap(), None);
        assert_eq!(provider().embed("https://www.google.com/maps/dir/Origin").unwrap(), None);
    }

    #[test]
    fn unsupported_shapes_are_not_embedded() {
        assert_eq!(provider().embed("https://www.google.com/maps").unwrap(), None);
        assert_eq!(provider().embed("https://www.google.com/maps/search/").unwrap(), None);
    }

    #[test]
    fn non_ascii_zoom_is_not_a_view() {
        let url = "https://www.google.com/maps/@37.7749,-122.4194,١٢z";
        assert_eq!(provider().embed(url).unwrap(), None);
    }

    #[test]
    fn missing_key_means_no_embed() {
        let url = "https://www.google.com/maps/@37.7749,-122.4194,12z";
        assert_eq!(GoogleMapsProvider::new(None).embed(url).unwrap(), None);
        assert_eq!(GoogleMapsProvider::new(Some(String::new())).embed(url).unwrap(), None);
    }

    #[test]
    fn key_comes_from_config_source() {
        let config = EmbedConfig::default().with_google_maps_api_key("from-config");
        let html = GoogleMapsProvider::from_source(&config)
            .embed("https://www.google.com/maps/place/Berlin")
            .unwrap()
            .unwrap();
        assert!(html.contains("key=from-config"));

        let empty: HashMap<String, String> = HashMap::new();
        let provider = GoogleMapsProvider::from_source(&empty);
        assert_eq!(provider.embed("https://www.google.com/maps/place/Berlin").unwrap(), None);
    }
}
