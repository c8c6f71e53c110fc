//! Relative path handling for Browse-Mirror
//!
//! A [`RelativePath`] names a folder or file relative to the crawl root. The
//! same segment sequence is used for the remote locator and for the local
//! destination, so the local tree mirrors the remote one.

mod encode;
mod sanitize;

pub use encode::{file_url, listing_url, strip_trailing_slashes};
pub use sanitize::validate_segment;

use crate::PathError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Slash-separated path from the crawl root
///
/// Every segment has passed [`validate_segment`], so joining the path onto
/// the output directory never leaves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// The crawl root (empty path)
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true for the crawl root
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the path extended by one listed name
    ///
    /// # Returns
    ///
    /// * `Ok(RelativePath)` - The child path
    /// * `Err(PathError)` - The name cannot be used as a path segment
    ///
    /// # Examples
    ///
    /// ```
    /// use browse_mirror::RelativePath;
    ///
    /// let path = RelativePath::root().join("photos").unwrap().join("2023").unwrap();
    /// assert_eq!(path.to_string(), "photos/2023");
    /// assert!(path.join("..").is_err());
    /// ```
    pub fn join(&self, name: &str) -> Result<Self, PathError> {
        validate_segment(name)?;
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(Self { segments })
    }

    /// Returns the raw (not percent-encoded) segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the local path of this entry under `root`
    pub fn local_path(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(&self.segments);
        path
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
