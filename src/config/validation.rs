use crate::config::types::{default_user_agent, Config, Settings, TlsMode, DEFAULT_OUTPUT_DIR};
use crate::filter::ExtensionFilter;
use crate::paths::strip_trailing_slashes;
use crate::ConfigError;
use std::path::{Path, PathBuf};
use url::Url;

/// Validates layered settings and fills in defaults
pub fn resolve(settings: Settings) -> Result<Config, ConfigError> {
    let url = settings
        .url
        .ok_or_else(|| ConfigError::Validation("a base URL is required (--url)".to_string()))?;
    let base_url = validate_base_url(&url)?;

    let output_dir = settings
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    validate_output_dir(&output_dir)?;

    let filter = match settings.types.as_deref() {
        Some(types) => ExtensionFilter::parse(types)?,
        None => ExtensionFilter::default(),
    };

    let user_agent = settings.user_agent.unwrap_or_else(default_user_agent);
    validate_user_agent(&user_agent)?;

    Ok(Config {
        base_url,
        output_dir,
        filter,
        tls: TlsMode::from_verify_flag(settings.verify_tls.unwrap_or(false)),
        user_agent,
    })
}

/// Validates a base URL and returns it with trailing slashes stripped
pub fn validate_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = strip_trailing_slashes(url.trim());
    if trimmed.is_empty() {
        return Err(ConfigError::Validation("base URL cannot be empty".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base URL '{}': {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base URL has no host: '{}'",
            url
        )));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::InvalidUrl(format!(
            "base URL cannot carry a query or fragment: '{}'",
            url
        )));
    }

    Ok(trimmed.to_string())
}

fn validate_output_dir(dir: &Path) -> Result<(), ConfigError> {
    if dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if dir.is_file() {
        return Err(ConfigError::Validation(format!(
            "output path '{}' exists and is not a directory",
            dir.display()
        )));
    }

    Ok(())
}

fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if user_agent.chars().any(char::is_control) {
        return Err(ConfigError::Validation(format!(
            "user_agent cannot contain control characters, got {:?}",
            user_agent
        )));
    }

    Ok(())
}
