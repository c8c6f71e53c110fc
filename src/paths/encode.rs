use crate::paths::RelativePath;
use crate::UrlError;
use url::Url;

/// Listing endpoint, relative to the base URL
const LISTING_ENDPOINT: &str = "api/browse";

/// Strips every trailing `/` from a base URL
///
/// # Examples
///
/// ```
/// use browse_mirror::paths::strip_trailing_slashes;
///
/// assert_eq!(strip_trailing_slashes("http://host:8080//"), "http://host:8080");
/// ```
pub fn strip_trailing_slashes(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Builds the listing URL for a folder
///
/// The root folder maps to `{base}/api/browse`, any other folder to
/// `{base}/api/browse/{encoded path}`.
///
/// # Examples
///
/// ```
/// use browse_mirror::paths::listing_url;
/// use browse_mirror::RelativePath;
///
/// let root = RelativePath::root();
/// assert_eq!(
///     listing_url("http://host/", &root).unwrap().as_str(),
///     "http://host/api/browse"
/// );
///
/// let folder = root.join("my photos").unwrap();
/// assert_eq!(
///     listing_url("http://host", &folder).unwrap().as_str(),
///     "http://host/api/browse/my%20photos"
/// );
/// ```
pub fn listing_url(base_url: &str, path: &RelativePath) -> Result<Url, UrlError> {
    let endpoint = format!("{}/{}", strip_trailing_slashes(base_url), LISTING_ENDPOINT);
    append_path(&endpoint, path)
}

/// Builds the download URL for a file: `{base}/{encoded path}`
pub fn file_url(base_url: &str, path: &RelativePath) -> Result<Url, UrlError> {
    append_path(strip_trailing_slashes(base_url), path)
}

/// Parses `prefix` and appends each segment of `path`, percent-encoded
fn append_path(prefix: &str, path: &RelativePath) -> Result<Url, UrlError> {
    let mut url = Url::parse(prefix)?;
    if path.is_root() {
        return Ok(url);
    }

    url.path_segments_mut()
        .map_err(|_| UrlError::CannotBeBase(prefix.to_string()))?
        .pop_if_empty()
        .extend(path.segments());

    Ok(url)
}
