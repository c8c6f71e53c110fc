//! Browse-Mirror: a directory-listing mirror
//!
//! This crate walks a JSON directory-listing API (`/api/browse`) depth-first,
//! recreates the remote folder tree locally and downloads the files whose
//! extension passes a configured filter.

pub mod config;
pub mod crawler;
pub mod filter;
pub mod output;
pub mod paths;

use thiserror::Error;

/// Main error type for Browse-Mirror operations
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed listing from {url}: {source}")]
    Listing {
        url: String,
        source: serde_json::Error,
    },

    #[error("Rejected path: {0}")]
    Path(#[from] PathError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors for names that cannot become a path segment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty name")]
    Empty,

    #[error("'{0}' is a relative directory reference")]
    DotSegment(String),

    #[error("'{0}' contains a path separator")]
    Separator(String),

    #[error("'{0}' contains a control character")]
    ControlChar(String),
}

/// URL construction errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("URL cannot carry path segments: {0}")]
    CannotBeBase(String),
}

/// Result type alias for Browse-Mirror operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Crawler};
pub use filter::ExtensionFilter;
pub use output::CrawlSummary;
pub use paths::RelativePath;
