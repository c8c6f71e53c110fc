use crate::config::types::{Config, Settings};
use crate::config::validation::resolve;
use crate::ConfigError;
use std::path::Path;

/// Reads raw settings from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Settings)` - Parsed settings, not yet validated
/// * `Err(ConfigError)` - Failed to read or parse the file
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

/// Builds the crawl configuration from an optional file and CLI settings
///
/// CLI values override file values, which override built-in defaults.
///
/// # Arguments
///
/// * `path` - Optional path to a TOML configuration file
/// * `cli` - Settings given on the command line
///
/// # Returns
///
/// * `Ok(Config)` - Validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate
///
/// # Example
///
/// ```
/// use browse_mirror::config::{load_config, Settings};
///
/// let cli = Settings {
///     url: Some("http://192.168.1.234:8080/".to_string()),
///     types: Some("pdf,jpg".to_string()),
///     ..Default::default()
/// };
/// let config = load_config(None, cli).unwrap();
/// assert_eq!(config.base_url, "http://192.168.1.234:8080");
/// ```
pub fn load_config(path: Option<&Path>, cli: Settings) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    resolve(file.merged_with(cli))
}
