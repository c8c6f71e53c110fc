//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client (user agent, TLS mode)
//! - GET requests with status checking
//! - Streaming a file body to disk

use crate::config::Config;
use crate::MirrorError;
use reqwest::{Client, Response};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

/// Write buffer size used when streaming a file to disk
pub const CHUNK_SIZE: usize = 8192;

/// Builds an HTTP client for a crawl
///
/// Certificate validation follows `config.tls`; no timeouts are set beyond
/// reqwest's defaults.
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .danger_accept_invalid_certs(config.tls.accepts_invalid_certs())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sends a GET request and fails on a non-success status
pub(crate) async fn get_checked(client: &Client, url: &str) -> Result<Response, MirrorError> {
    tracing::trace!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| MirrorError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MirrorError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}

/// Downloads one file to `dest`
///
/// The body is streamed chunk by chunk through a buffered writer, so the
/// file is never held in memory. Missing parent directories are created.
/// If the transfer fails after `dest` was created, the partial file is
/// removed.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The file URL
/// * `dest` - Local destination path
///
/// # Returns
///
/// * `Ok(u64)` - Number of bytes written
/// * `Err(MirrorError)` - Request, status, or write failure
pub async fn download_file(client: &Client, url: &Url, dest: &Path) -> Result<u64, MirrorError> {
    let mut response = get_checked(client, url.as_str()).await?;

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let result = stream_to_file(&mut response, url, dest).await;
    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(dest).await {
            tracing::debug!("Could not remove partial file {}: {}", dest.display(), e);
        }
    }

    result
}

async fn stream_to_file(
    response: &mut Response,
    url: &Url,
    dest: &Path,
) -> Result<u64, MirrorError> {
    let file = File::create(dest).await?;
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
    let mut written: u64 = 0;

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|source| MirrorError::Http {
            url: url.to_string(),
            source,
        })?
    {
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    writer.flush().await?;
    Ok(written)
}
