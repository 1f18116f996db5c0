// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for commitgraph-git

use thiserror::Error;

/// Errors that can occur while loading commit history
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Path is missing, is not a git working copy, or is a bare repository
    #[error("Invalid repository: {path} ({reason})")]
    InvalidRepository {
        /// The path that was opened
        path: String,
        /// Why the path was rejected
        reason: String,
    },

    /// The repository has no local branches
    #[error("No branches: the repository does not contain any branches")]
    NoBranches,

    /// HEAD is detached and no branch was requested explicitly
    #[error("Detached HEAD: the repository has no active branch")]
    DetachedHead,

    /// The selected branch has no commits
    #[error("Empty history: branch '{branch}' does not contain any commits")]
    EmptyHistory {
        /// The branch that was walked
        branch: String,
    },

    /// The cutoff date could not be parsed as a calendar date
    #[error("Invalid date: '{input}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input
        input: String,
    },

    /// Requested branch does not exist
    #[error("Invalid branch reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },
}
