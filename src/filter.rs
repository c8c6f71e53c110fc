//! Extension filter deciding which listed files get downloaded

use crate::ConfigError;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Extensions downloaded when no `--types` is given: common image formats
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "gif", "bmp", "webp"];

/// Accept/reject rule applied to file names before download
///
/// Extensions are stored lowercase with their leading dot (`.jpg`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// Download every file, including files without an extension
    All,
    /// Download only files whose extension is in the set
    Only(BTreeSet<String>),
}

impl ExtensionFilter {
    /// Parses a `--types` value
    ///
    /// `all` (any case) disables filtering. Anything else is read as a
    /// comma-separated list of extensions without leading dots, e.g.
    /// `jpg,png,pdf`.
    ///
    /// # Returns
    ///
    /// * `Ok(ExtensionFilter)` - The parsed filter
    /// * `Err(ConfigError)` - The list named no extension at all
    ///
    /// # Examples
    ///
    /// ```
    /// use browse_mirror::ExtensionFilter;
    ///
    /// let filter = ExtensionFilter::parse("JPG,png").unwrap();
    /// assert!(filter.accepts("photo.jpg"));
    /// assert!(!filter.accepts("notes.txt"));
    /// ```
    pub fn parse(types: &str) -> Result<Self, ConfigError> {
        let types = types.trim();
        if types.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        let extensions: BTreeSet<String> = types
            .split(',')
            .map(|item| item.trim().trim_start_matches('.'))
            .filter(|item| !item.is_empty())
            .map(|item| format!(".{}", item.to_lowercase()))
            .collect();

        if extensions.is_empty() {
            return Err(ConfigError::Validation(format!(
                "types must be 'all' or a comma-separated list of extensions, got '{}'",
                types
            )));
        }

        Ok(Self::Only(extensions))
    }

    /// Returns true if a file with this name should be downloaded
    pub fn accepts(&self, file_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(extensions) => extensions.contains(&extension_of(file_name)),
        }
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::Only(
            DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect(),
        )
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(extensions) => {
                let joined: Vec<&str> = extensions.iter().map(String::as_str).collect();
                write!(f, "{}", joined.join(","))
            }
        }
    }
}

/// Returns the lowercase extension of a file name, leading dot included
///
/// The extension starts at the last `.` of the name. Names without a dot,
/// and dot-files such as `.bashrc`, have the empty extension.
pub fn extension_of(file_name: &str) -> String {
    match Path::new(file_name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}
