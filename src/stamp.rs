//! Stamping pipeline
//!
//! Orchestrates one run: resolve inputs, derive the substitution values,
//! transform the template, write the output. Kept separate from CLI argument
//! parsing so the pipeline can be called programmatically without depending
//! on clap.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::scm;
use crate::template::{self, Substitutions};
use crate::ui;
use crate::version::{self, VersionValues};

/// Resolved inputs for one stamping run.
///
/// Mirrors the CLI flags but in a format suitable for the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct StampRequest {
    /// Template file to read
    pub input: PathBuf,

    /// Output file to write
    pub output: PathBuf,

    /// Version-tag file
    pub version_file: PathBuf,

    /// Source-control executable, if branch/commit lookup was requested
    pub git: Option<PathBuf>,
}

/// Result of a successful stamping run.
#[derive(Debug, Clone, PartialEq)]
pub struct StampSummary {
    /// The version string substituted for `${LIB_VERSION}`
    pub version: String,

    /// The comma-form version substituted for `${LIB_VERSION_NUM}`
    pub version_number: String,

    /// The branch name substituted for `${GIT_BRANCH}`
    pub branch: String,

    /// The commit hash substituted for `${GIT_COMMIT_HASH}`
    pub commit: String,

    /// Number of template lines written to the output
    pub lines: usize,
}

/// Runs the stamping pipeline.
///
/// The template and version-tag files are opened and validated first; the
/// output file is the last resource acquired, so a failure in any earlier
/// step leaves a pre-existing output untouched.
pub fn run(request: &StampRequest, config: &Config) -> Result<StampSummary> {
    let input = File::open(&request.input)?;

    let tag_line = version::read_version_tag(&request.version_file)?;
    let values = VersionValues::derive(&tag_line);

    let (branch, commit) = resolve_scm_values(request.git.as_deref(), config);

    let subs = Substitutions {
        version_number: values.number,
        version: values.version,
        branch,
        commit,
    };

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(File::create(&request.output)?);
    let lines = template::render(&mut reader, &mut writer, &subs)?;
    writer.flush()?;

    Ok(StampSummary {
        version: subs.version,
        version_number: subs.version_number,
        branch: subs.branch,
        commit: subs.commit,
        lines,
    })
}

/// Resolves branch and commit values, falling back to the configured
/// placeholders.
///
/// Lookups run only when an executable path is available, preferring the
/// command line over configuration. Each lookup fails independently: a
/// failed branch lookup still leaves a successful commit lookup in effect,
/// and vice versa. Failures are warnings, never errors.
fn resolve_scm_values(cli_git: Option<&Path>, config: &Config) -> (String, String) {
    let mut branch = config.placeholders.branch.clone();
    let mut commit = config.placeholders.commit.clone();

    let git = cli_git
        .map(Path::to_path_buf)
        .or_else(|| config.defaults.git.as_ref().map(PathBuf::from));

    let Some(git) = git else {
        return (branch, commit);
    };

    match scm::branch_name(&git) {
        Ok(name) => branch = name,
        Err(e) => ui::display_warning(&format!("Could not properly determine branch: {}", e)),
    }

    match scm::commit_hash(&git) {
        Ok(hash) => commit = hash,
        Err(e) => {
            ui::display_warning(&format!("Could not properly determine commit hash: {}", e))
        }
    }

    (branch, commit)
}
