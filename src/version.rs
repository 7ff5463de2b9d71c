use std::path::Path;

use crate::error::{Result, StampError};

/// String values derived from a version tag.
///
/// Carries the two substitution values computed from the version-tag file:
/// the human-readable version and its comma-separated numeric form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionValues {
    pub version: String,
    pub number: String,
}

impl VersionValues {
    /// Derives both version values from the first line of a version-tag file.
    ///
    /// The version string is the tag truncated at the first `-`, discarding
    /// any pre-release or build suffix. The version number is the version
    /// string with its `.`-separated components joined by `,` and a literal
    /// `,0` appended, as used in binary-resource version fields.
    ///
    /// # Arguments
    /// * `tag_line` - First line of the version-tag file (e.g., "1.2.3-rc1")
    ///
    /// # Example
    /// ```ignore
    /// let values = VersionValues::derive("2.5.10-rc1");
    /// assert_eq!(values.version, "2.5.10");
    /// assert_eq!(values.number, "2,5,10,0");
    /// ```
    pub fn derive(tag_line: &str) -> Self {
        let version = tag_line
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string();

        let components: Vec<&str> = version.split('.').collect();
        let number = format!("{},0", components.join(","));

        VersionValues { version, number }
    }
}

/// Reads the version-tag file and returns its first line as a string.
///
/// The file must hold a single content line, optionally followed by one
/// trailing line terminator. Anything longer is rejected before any output
/// is produced.
///
/// # Arguments
/// * `path` - Path to the version-tag file
///
/// # Returns
/// * `Ok(String)` - First line of the file, decoded as UTF-8
/// * `Err` - If the file is unreadable, holds more than one line, or its
///   first line is not valid UTF-8
pub fn read_version_tag(path: &Path) -> Result<String> {
    let raw = std::fs::read(path)?;

    let segments: Vec<&[u8]> = raw.split(|byte| *byte == b'\n').collect();
    if segments.len() > 2 {
        return Err(StampError::version_tag(format!(
            "expected a single line in {}",
            path.display()
        )));
    }

    let first = segments.first().copied().unwrap_or_default();
    let line = std::str::from_utf8(first).map_err(|_| {
        StampError::version_tag(format!("{} is not valid UTF-8", path.display()))
    })?;

    Ok(line.to_string())
}
