use anyhow::{Context, Result};

use embedurl::{EmbedConfig, EmbedRouter};

/// Print the embed for `url`. Returns whether an embed was produced.
pub fn cmd_resolve(url: &str, json: bool, config: &EmbedConfig) -> Result<bool> {
    let router = EmbedRouter::with_config(config);
    let result = router.resolve(url);

    if json {
        let rendered =
            serde_json::to_string_pretty(&result).context("failed to serialize embed result")?;
        println!("{rendered}");
        return Ok(true);
    }

    match &result.embeddable {
        Some(html) => {
            println!("{html}");
            Ok(true)
        }
        None if result.is_known() => {
            eprintln!("{}: could not build an embed for {url}", result.sitename);
            Ok(false)
        }
        None => {
            eprintln!("No provider recognizes {url}");
            Ok(false)
        }
    }
}
