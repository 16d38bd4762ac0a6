use anyhow::Context;
use xebula_sdk::{Config, Xebula};

fn main() -> anyhow::Result<()> {
    xebula_sdk::init();
    let config = Config::from_env().context("Failed to load Xebula configuration")?;
    let xebula = Xebula::new(config);
    let entity = xebula.entity().context("Failed to build API entity")?;

    let config = xebula.config();
    println!("Xebula SDK {} Configuration:\n", xebula_sdk::VERSION);
    println!("  Base URL: {}", config.base_url);
    println!("  Timeout: {} ms", config.timeout_ms);
    println!(
        "  Basic Auth: {}",
        match &config.basic_auth {
            Some(auth) if auth.is_set() => auth.username.as_str(),
            _ => "(not set)",
        }
    );
    for header in &config.default_headers {
        println!("  Header: {}: {}", header.key, header.value);
    }
    println!(
        "  Tron Curve: {}",
        xebula.tron().network.curve.map(|c| c.name()).unwrap_or("(none)")
    );
    println!("  Example Endpoint: {}", entity.build_url("/status")?);
    Ok(())
}
