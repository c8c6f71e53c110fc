//! Validation of listed names before they become path segments

use crate::PathError;

/// Checks that a name from a listing is safe to use as one path segment
///
/// Listed names are used verbatim on disk, so anything that could address a
/// different directory is refused rather than rewritten:
///
/// - empty names
/// - `.` and `..`
/// - names containing `/` or `\`
/// - names containing NUL or other control characters
pub fn validate_segment(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::Empty);
    }

    if name == "." || name == ".." {
        return Err(PathError::DotSegment(name.to_string()));
    }

    if name.contains(['/', '\\']) {
        return Err(PathError::Separator(name.to_string()));
    }

    if name.chars().any(char::is_control) {
        return Err(PathError::ControlChar(name.to_string()));
    }

    Ok(())
}
