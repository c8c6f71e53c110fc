//! Folder listings served by `/api/browse`

use crate::crawler::fetcher::get_checked;
use crate::paths::{listing_url, RelativePath};
use crate::MirrorError;
use reqwest::Client;
use serde::Deserialize;

/// Contents of one remote folder
///
/// Parsed from a JSON object of the form
/// `{"folders": ["a", "b"], "images": ["x.jpg"]}`. A missing key is an empty
/// list; other keys are ignored. Names keep the order the server sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Listing {
    /// Names of the immediate subfolders
    #[serde(default)]
    pub folders: Vec<String>,

    /// Names of the files directly in this folder
    #[serde(default, rename = "images")]
    pub files: Vec<String>,
}

impl Listing {
    /// Parses a listing body
    ///
    /// Anything but a JSON object whose `folders`/`images` entries are lists
    /// of strings is an error.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Fetches and parses the listing of one folder
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - Site base URL, without trailing slash
/// * `path` - Folder to list (the root for the crawl start)
///
/// # Returns
///
/// * `Ok(Listing)` - The folder contents
/// * `Err(MirrorError)` - Network error, non-success status, or malformed body
pub async fn fetch_listing(
    client: &Client,
    base_url: &str,
    path: &RelativePath,
) -> Result<Listing, MirrorError> {
    let url = listing_url(base_url, path)?;
    tracing::debug!("Listing {}", url);

    let response = get_checked(client, url.as_str()).await?;
    let body = response.bytes().await.map_err(|source| MirrorError::Http {
        url: url.to_string(),
        source,
    })?;

    Listing::parse(&body).map_err(|source| MirrorError::Listing {
        url: url.to_string(),
        source,
    })
}
