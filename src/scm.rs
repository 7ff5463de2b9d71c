use std::path::Path;
use std::process::Command;

use crate::error::{Result, StampError};

/// Placeholder substituted when the branch cannot be determined.
pub const BRANCH_FALLBACK: &str = "UNKNOWN";

/// Placeholder substituted when the commit hash cannot be determined.
pub const COMMIT_FALLBACK: &str = "unknown";

/// Resolves the abbreviated name of the current branch.
///
/// # Arguments
/// * `git` - Path to the source-control executable to invoke
pub fn branch_name(git: &Path) -> Result<String> {
    run_rev_parse(git, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Resolves the abbreviated hash of the current commit.
///
/// # Arguments
/// * `git` - Path to the source-control executable to invoke
pub fn commit_hash(git: &Path) -> Result<String> {
    run_rev_parse(git, &["rev-parse", "--short", "HEAD"])
}

/// Runs the executable once, capturing stdout. Each lookup is attempted
/// exactly once; there are no retries.
fn run_rev_parse(git: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new(git)
        .args(args)
        .output()
        .map_err(|e| StampError::scm(format!("could not run {}: {}", git.display(), e)))?;

    if !output.status.success() {
        return Err(StampError::scm(format!(
            "{} {} exited with {}",
            git.display(),
            args.join(" "),
            output.status
        )));
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| {
        StampError::scm(format!("{} produced non-UTF-8 output", git.display()))
    })?;

    Ok(stdout.trim().to_string())
}
