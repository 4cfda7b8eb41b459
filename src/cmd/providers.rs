use embedurl::{EmbedConfig, EmbedRouter};

pub fn cmd_providers(config: &EmbedConfig) {
    let router = EmbedRouter::with_config(config);

    for (i, name) in router.names().iter().enumerate() {
        println!("{:>2}. {name}", i + 1);
    }

    if config.google_maps_api_key.is_none() {
        eprintln!("note: no Google Maps API key configured, GoogleMaps links will not embed");
    }
}
