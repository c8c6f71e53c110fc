use crate::filter::ExtensionFilter;
use serde::Deserialize;
use std::path::PathBuf;

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "downloaded_files";

/// Raw settings, as read from a TOML file or the command line
///
/// Every field is optional so that sources can be layered; see
/// [`Settings::merged_with`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Base URL of the site exposing `/api/browse`
    pub url: Option<String>,

    /// Directory the remote tree is mirrored into
    pub output: Option<PathBuf>,

    /// Comma-separated extensions without dots, or `all`
    pub types: Option<String>,

    /// Validate TLS certificates (off unless requested)
    #[serde(rename = "verify-tls")]
    pub verify_tls: Option<bool>,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

impl Settings {
    /// Layers `overrides` on top of `self`: any field set in `overrides` wins
    pub fn merged_with(self, overrides: Settings) -> Settings {
        Settings {
            url: overrides.url.or(self.url),
            output: overrides.output.or(self.output),
            types: overrides.types.or(self.types),
            verify_tls: overrides.verify_tls.or(self.verify_tls),
            user_agent: overrides.user_agent.or(self.user_agent),
        }
    }
}

/// Resolved configuration for one crawl
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL with trailing slashes stripped
    pub base_url: String,

    /// Local root of the mirrored tree
    pub output_dir: PathBuf,

    /// Which files to download
    pub filter: ExtensionFilter,

    /// TLS certificate handling
    pub tls: TlsMode,

    /// User-Agent header value
    pub user_agent: String,
}

/// How the HTTP client treats server certificates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Accept self-signed and otherwise invalid certificates
    AcceptInvalidCerts,
    /// Normal certificate validation
    Verify,
}

impl TlsMode {
    pub fn from_verify_flag(verify: bool) -> Self {
        if verify {
            Self::Verify
        } else {
            Self::AcceptInvalidCerts
        }
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        matches!(self, Self::AcceptInvalidCerts)
    }
}

/// Default User-Agent: `browse-mirror/<version>`
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
