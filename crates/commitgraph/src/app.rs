//! Application flow
//!
//! Parses the cutoff, validates the output location, loads the history,
//! renders it and only then writes the output file. The file is written to a
//! temporary sibling and renamed into place, so a failed run never leaves a
//! partial diagram or clobbers an earlier one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use commitgraph_git::{CommitSource, Cutoff, GitError, GitRepo, load_history};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, ConfigError};
use crate::render::{Diagram, RenderOptions, render};

/// Errors that end a run
#[derive(Debug, Error)]
pub enum AppError {
    /// History could not be loaded
    #[error(transparent)]
    Git(#[from] GitError),

    /// Configuration is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output file could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        /// The output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the diagram was written
    pub output: PathBuf,
    /// Branch that was drawn
    pub branch: String,
    /// The rendered diagram
    pub diagram: Diagram,
}

/// Load a branch's history from `source` and render it
///
/// # Errors
///
/// Returns whatever `load_history` reports.
pub fn generate<S>(
    source: &S,
    branch: Option<&str>,
    cutoff: &Cutoff,
    options: &RenderOptions,
) -> Result<(String, Diagram), GitError>
where
    S: CommitSource + ?Sized,
{
    let history = load_history(source, branch, cutoff)?;
    if history.is_empty() {
        warn!(cutoff = %cutoff, "No commits at or before the cutoff date");
    }

    let diagram = render(&history.commits, options);
    debug!(
        nodes = diagram.nodes,
        edges = diagram.edges,
        dropped_edges = diagram.dropped_edges,
        "Rendered diagram"
    );

    Ok((history.branch, diagram))
}

/// Run the whole pipeline for a parsed configuration
///
/// # Errors
///
/// Returns `AppError` if the date is invalid, the output location is
/// unusable, the repository cannot be read, or the file cannot be written.
pub fn run(config: &Config) -> Result<RunSummary, AppError> {
    let cutoff = config.cutoff()?;
    config.validate()?;

    let output = config.output_path();
    info!(
        repo = %config.repo_path.display(),
        cutoff = %cutoff,
        output = %output.display(),
        "Building commit graph"
    );

    let repo = GitRepo::open(&config.repo_path)?;
    debug!(git_dir = %repo.path().display(), "Opened repository");

    let (branch, diagram) = generate(
        &repo,
        config.branch.as_deref(),
        &cutoff,
        &config.render_options(),
    )?;

    write_output(&output, &diagram.text)?;

    info!(
        branch = %branch,
        nodes = diagram.nodes,
        edges = diagram.edges,
        "Wrote commit graph"
    );

    Ok(RunSummary {
        output,
        branch,
        diagram,
    })
}

/// Replace `path` with `text`
///
/// # Errors
///
/// Returns `AppError::Write` if the temporary file cannot be created, filled
/// or renamed over `path`. The existing file is left as it was.
pub fn write_output(path: &Path, text: &str) -> Result<(), AppError> {
    write_atomic(path, |file| file.write_all(text.as_bytes()))
}

fn write_atomic<F>(path: &Path, fill: F) -> Result<(), AppError>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let write_error = |source: io::Error| AppError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    fill(&mut file).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    if let Some(permissions) = output_permissions(path).map_err(write_error)? {
        file.as_file().set_permissions(permissions).map_err(write_error)?;
    }

    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Mode for the replacement file: that of the file being replaced, or 0644
/// for a new file on unix
fn output_permissions(path: &Path) -> io::Result<Option<fs::Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
