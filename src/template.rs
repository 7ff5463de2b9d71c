use std::io::{BufRead, Write};

use crate::error::Result;

pub const TOKEN_VERSION_NUM: &str = "${LIB_VERSION_NUM}";
pub const TOKEN_VERSION: &str = "${LIB_VERSION}";
pub const TOKEN_BRANCH: &str = "${GIT_BRANCH}";
pub const TOKEN_COMMIT_HASH: &str = "${GIT_COMMIT_HASH}";

/// The four substitution values, fixed before the first line is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    pub version_number: String,
    pub version: String,
    pub branch: String,
    pub commit: String,
}

impl Substitutions {
    /// Replaces every token occurrence in a single line.
    ///
    /// Substitutions are applied in a fixed order, each against the result
    /// of the previous one. Tokens absent from the line are no-ops; no other
    /// text is modified.
    pub fn apply(&self, line: &str) -> String {
        line.replace(TOKEN_VERSION_NUM, &self.version_number)
            .replace(TOKEN_VERSION, &self.version)
            .replace(TOKEN_BRANCH, &self.branch)
            .replace(TOKEN_COMMIT_HASH, &self.commit)
    }
}

/// Copies `reader` to `writer` line by line, applying the substitutions to
/// each line.
///
/// Line boundaries and terminators are preserved exactly: a `\r\n` stays
/// `\r\n`, and a final line without a terminator is written without one.
/// Empty input produces empty output.
///
/// # Returns
/// * `Ok(usize)` - Number of lines written
pub fn render<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    subs: &Substitutions,
) -> Result<usize> {
    let mut line = String::new();
    let mut lines = 0usize;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        writer.write_all(subs.apply(&line).as_bytes())?;
        lines += 1;
    }

    Ok(lines)
}
