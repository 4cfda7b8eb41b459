//! Bing Maps embeds.
//!
//! A `cp=<lat>~<lng>` center point (with optional `lvl=` zoom, default 12)
//! takes precedence over a `q=` search query.

use std::sync::LazyLock;

use regex::Regex;

use super::EmbedProvider;
use crate::error::{EmbedError, Result};

static CENTER_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]cp=(-?[0-9]+\.[0-9]+)~(-?[0-9]+\.[0-9]+)").unwrap());
static QUERY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?&]q=([^&]+)").unwrap());
static LEVEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?&]lvl=([0-9]+)").unwrap());

const DEFAULT_LEVEL: &str = "12";
const EMBED_BASE: &str = "https://www.bing.com/maps/embed?h=600&w=800";

/// `urlencoding::decode` passes `%` through when it is not followed by two
/// hex digits; reject those so every malformed escape is a decode fault.
fn decode_query(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    });
    if !well_formed {
        return Err(EmbedError::MalformedEscape(raw.to_string()));
    }
    Ok(urlencoding::decode(raw)?.replace('+', " "))
}

/// Bing Maps embed provider.
pub struct BingMapsProvider;

impl EmbedProvider for BingMapsProvider {
    fn name(&self) -> &str {
        "BingMaps"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("bing.com/maps")
    }

    /// # Errors
    ///
    /// Fails when the `q=` value holds a malformed percent-escape or decodes
    /// to invalid UTF-8.
    fn embed(&self, url: &str) -> Result<Option<String>> {
        let src = if let Some(caps) = CENTER_POINT.captures(url) {
            let level = LEVEL
                .captures(url)
                .and_then(|c| c.get(1))
                .map_or(DEFAULT_LEVEL, |m| m.as_str());
            format!(
                "{EMBED_BASE}&cp={}~{}&lvl={level}&typ=d&sty=r",
                &caps[1], &caps[2]
            )
        } else if let Some(caps) = QUERY.captures(url) {
            let query = decode_query(&caps[1])?;
            format!("{EMBED_BASE}&q={}", urlencoding::encode(&query))
        } else {
            return Ok(None);
        };

        Ok(Some(format!(
            r#"<iframe width="600" height="450" frameborder="0" src="{src}" scrolling="no"></iframe>"#
        )))
    }
}
