//! Configuration for the commitgraph CLI
//!
//! This module provides the command-line configuration: repository and
//! branch selection, the cutoff date, the output file and logging options.

use std::path::PathBuf;

use clap::Parser;
use commitgraph_git::{Cutoff, GitError};

use crate::render::{LabelStyle, RenderOptions};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "graph.mmd";

/// Commit dependency graph - render a branch's history as a Mermaid diagram
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "commitgraph")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository to analyse
    ///
    /// Must be the root of a non-bare working copy.
    #[arg(short, long, env = "COMMITGRAPH_REPO")]
    pub repo_path: PathBuf,

    /// Cutoff date in YYYY-MM-DD format
    ///
    /// Only commits made at or before midnight UTC of this date are drawn.
    #[arg(short, long)]
    pub date: String,

    /// Path of the Mermaid file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: Option<PathBuf>,

    /// Branch to walk (defaults to the checked-out branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Text shown after the commit number in each node
    #[arg(long, value_enum, default_value_t = LabelStyle::Message)]
    pub labels: LabelStyle,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr. Without this flag only warnings and
    /// errors are logged.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress warnings
    ///
    /// Only errors will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the output path, using `graph.mmd` if not specified
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Parse the cutoff date
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidDate` if the date is not `YYYY-MM-DD`.
    pub fn cutoff(&self) -> Result<Cutoff, GitError> {
        Cutoff::parse(&self.date)
    }

    /// Rendering options derived from the flags
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            labels: self.labels,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output path names an existing directory
    /// - The output file's parent directory does not exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        let output = self.output_path();

        if output.is_dir() {
            return Err(ConfigError::OutputIsDirectory(output));
        }

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ConfigError::OutputDirectoryNotFound(parent.to_path_buf()));
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Output path points at a directory
    #[error("Output path is a directory: {0}")]
    OutputIsDirectory(PathBuf),

    /// Output file's parent directory is missing
    #[error("Output directory not found: {0}")]
    OutputDirectoryNotFound(PathBuf),
}
