//! Depth-first walk over the listing tree
//!
//! Each folder is listed, its local directory created, its subfolders walked
//! in the order the server returned them, and finally its accepted files
//! downloaded. Failures are logged and counted, never propagated: a bad
//! folder loses its own subtree, a bad file loses only itself.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, download_file};
use crate::crawler::listing::fetch_listing;
use crate::output::CrawlSummary;
use crate::paths::{file_url, RelativePath};
use crate::{MirrorError, PathError};
use reqwest::Client;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

/// Sequential mirror of one remote tree
pub struct Crawler {
    config: Config,
    client: Client,
    visited: HashSet<RelativePath>,
    summary: CrawlSummary,
}

impl Crawler {
    /// Creates a crawler with an HTTP client built from `config`
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(MirrorError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, MirrorError> {
        let client = build_http_client(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a crawler that sends its requests through `client`
    pub fn with_client(config: Config, client: Client) -> Self {
        Self {
            config,
            client,
            visited: HashSet::new(),
            summary: CrawlSummary::default(),
        }
    }

    /// Walks the whole tree from the crawl root and returns the run counters
    pub async fn run(mut self) -> CrawlSummary {
        if let Err(e) = tokio::fs::create_dir_all(&self.config.output_dir).await {
            tracing::error!(
                "Cannot create output directory {}: {}",
                self.config.output_dir.display(),
                e
            );
        }

        self.visit(RelativePath::root()).await;
        self.summary
    }

    fn visit<'a>(
        &'a mut self,
        path: RelativePath,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            if !self.visited.insert(path.clone()) {
                tracing::warn!("Folder '{}' was already visited, not entering it again", path);
                self.summary.revisits_skipped += 1;
                return;
            }

            let listing = match fetch_listing(&self.client, &self.config.base_url, &path).await {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::error!("Error accessing listing for '{}': {}", path, e);
                    self.summary.listing_errors += 1;
                    return;
                }
            };
            self.summary.folders_listed += 1;

            let local_dir = path.local_path(&self.config.output_dir);
            if let Err(e) = tokio::fs::create_dir_all(&local_dir).await {
                tracing::error!("Cannot create directory {}: {}", local_dir.display(), e);
                self.summary.listing_errors += 1;
                return;
            }

            tracing::debug!(
                "Folder '{}': {} subfolders, {} files",
                path,
                listing.folders.len(),
                listing.files.len()
            );

            for folder in &listing.folders {
                match path.join(folder) {
                    Ok(child) => self.visit(child).await,
                    Err(e) => self.reject(&path, e),
                }
            }

            for file_name in &listing.files {
                self.fetch_file(&path, file_name).await;
            }
        })
    }

    async fn fetch_file(&mut self, folder: &RelativePath, file_name: &str) {
        if !self.config.filter.accepts(file_name) {
            tracing::debug!("Skipping '{}' in '{}': extension not selected", file_name, folder);
            self.summary.files_filtered += 1;
            return;
        }

        let path = match folder.join(file_name) {
            Ok(path) => path,
            Err(e) => {
                self.reject(folder, e);
                return;
            }
        };

        let url = match file_url(&self.config.base_url, &path) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Cannot build URL for '{}': {}", path, e);
                self.summary.download_errors += 1;
                return;
            }
        };

        let local_file = path.local_path(&self.config.output_dir);
        match download_file(&self.client, &url, &local_file).await {
            Ok(bytes) => {
                tracing::info!("Downloaded: {} ({} bytes)", local_file.display(), bytes);
                self.summary.files_downloaded += 1;
                self.summary.bytes_written += bytes;
            }
            Err(e) => {
                tracing::error!("Error downloading {} to {}: {}", url, local_file.display(), e);
                self.summary.download_errors += 1;
            }
        }
    }

    fn reject(&mut self, folder: &RelativePath, error: PathError) {
        tracing::warn!("Ignoring unsafe name listed in '{}': {}", folder, error);
        self.summary.names_rejected += 1;
    }
}

/// Mirrors the remote tree described by `config`
///
/// Every folder and file failure is logged and counted in the returned
/// summary; only a failure to build the HTTP client is returned as an error.
///
/// # Example
///
/// ```no_run
/// use browse_mirror::config::{load_config, Settings};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(
///     None,
///     Settings {
///         url: Some("http://192.168.1.234:8080".to_string()),
///         types: Some("pdf,jpg".to_string()),
///         ..Default::default()
///     },
/// )?;
/// let summary = browse_mirror::crawl(config).await?;
/// println!("{} files downloaded", summary.files_downloaded);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config) -> Result<CrawlSummary, MirrorError> {
    Ok(Crawler::new(config)?.run().await)
}
