// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History loading
//!
//! Loading is split in two: a [`CommitSource`] lists every commit reachable
//! from a branch, and [`number_commits`] filters that list to a cutoff,
//! orders it by commit time and assigns ordinals.

use tracing::{debug, info};

use crate::commit::{CommitRecord, RawCommit};
use crate::cutoff::Cutoff;
use crate::error::GitError;

/// Commits reachable from one branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCommits {
    /// Short name of the branch that was walked
    pub branch: String,
    /// Reachable commits in retrieval order (oldest first)
    pub commits: Vec<RawCommit>,
}

/// Anything that can list the commits of a branch
pub trait CommitSource {
    /// List every commit reachable from `branch`, or from the checked-out
    /// branch when `branch` is `None`
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the branch cannot be resolved or walked.
    fn list_commits(&self, branch: Option<&str>) -> Result<BranchCommits, GitError>;
}

/// Numbered history of a branch up to a cutoff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Branch the history was read from
    pub branch: String,
    /// In-scope commits, ordered by ordinal
    pub commits: Vec<CommitRecord>,
    /// Reachable commits left out because they are newer than the cutoff
    pub excluded: usize,
}

impl History {
    /// Number of in-scope commits
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// True when no commit falls within the cutoff
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Filter commits to the cutoff, sort them by commit time and number them
///
/// The sort is stable: commits sharing a timestamp keep their input order.
#[must_use]
pub fn number_commits(commits: Vec<RawCommit>, cutoff: &Cutoff) -> Vec<CommitRecord> {
    let mut in_scope: Vec<RawCommit> = commits
        .into_iter()
        .filter(|c| cutoff.includes(c.timestamp))
        .collect();

    in_scope.sort_by_key(|c| c.timestamp);

    in_scope
        .into_iter()
        .enumerate()
        .map(|(i, c)| c.into_record(i + 1))
        .collect()
}

/// Load the numbered history of a branch up to `cutoff`
///
/// # Errors
///
/// Returns `GitError::EmptyHistory` if the branch has no commits at all, or
/// whatever the source reports when resolving the branch.
pub fn load_history<S>(
    source: &S,
    branch: Option<&str>,
    cutoff: &Cutoff,
) -> Result<History, GitError>
where
    S: CommitSource + ?Sized,
{
    let BranchCommits { branch, commits } = source.list_commits(branch)?;
    if commits.is_empty() {
        return Err(GitError::EmptyHistory { branch });
    }

    let reachable = commits.len();
    debug!(branch = %branch, reachable, "Listed reachable commits");

    let commits = number_commits(commits, cutoff);
    let excluded = reachable - commits.len();

    info!(
        branch = %branch,
        cutoff = %cutoff,
        commits = commits.len(),
        excluded,
        "Loaded history"
    );

    Ok(History {
        branch,
        commits,
        excluded,
    })
}
