//! Configuration commands.

use runpost_core::Analyzer;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", ClientConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

/// Validate the configuration by compiling the analyzer it describes.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    let analyzer = check(config)?;
    println!(
        "Configuration is valid (brand: {}, {} extra boilerplate entries).",
        analyzer.brand(),
        config.analyzer.extra_phrases.len() + config.analyzer.extra_patterns.len()
    );
    Ok(())
}

fn check(config: &ClientConfig) -> ClientResult<Analyzer> {
    if config.display.top_activities == 0 {
        return Err(ClientError::Config(
            "display.top_activities must be at least 1".to_string(),
        ));
    }
    Analyzer::new(&config.analyzer).map_err(|e| ClientError::Config(e.to_string()))
}

/// Show the configuration file path.
pub fn path() -> ClientResult<()> {
    let config_path = ClientConfig::default_path();
    println!("config: {}", config_path.display());
    Ok(())
}
