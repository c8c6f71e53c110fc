//! Crawler module for listing folders and fetching files
//!
//! This module contains the core crawling logic, including:
//! - Listing model and `/api/browse` requests
//! - HTTP client construction and streamed file downloads
//! - The depth-first walk tying them together

mod fetcher;
mod listing;
mod walker;

pub use fetcher::{build_http_client, download_file, CHUNK_SIZE};
pub use listing::{fetch_listing, Listing};
pub use walker::{crawl, Crawler};
