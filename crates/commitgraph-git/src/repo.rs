// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git repository access
//!
//! This module reads branches and commits from a repository using the
//! `git2` crate. It never writes to the repository.

use std::path::Path;

use chrono::{DateTime, Utc};
use git2::{BranchType, ErrorCode, Oid, Repository, Sort};
use tracing::{debug, warn};

use crate::commit::RawCommit;
use crate::error::GitError;
use crate::history::{BranchCommits, CommitSource};

const BRANCH_PREFIX: &str = "refs/heads/";

/// A git repository wrapper for reading branch history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a non-bare git repository at the given path
    ///
    /// The path must be the root of a working copy; parent directories are
    /// not searched.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidRepository` if the path does not exist, is
    /// not a git repository, or is a bare repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let invalid = |reason: &str| GitError::InvalidRepository {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        if !path.exists() {
            return Err(invalid("path does not exist"));
        }

        let repo = Repository::open(path).map_err(|_| invalid("not a git repository"))?;
        if repo.is_bare() {
            return Err(invalid("bare repository"));
        }

        Ok(Self { repo })
    }

    /// Get the path of the `.git` directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the working directory path
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Names of all local branches, sorted
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the branch list cannot be read.
    pub fn branch_names(&self) -> Result<Vec<String>, GitError> {
        let mut names = Vec::new();
        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Resolve the branch to walk and its tip
    ///
    /// The tip is `None` when the checked-out branch is unborn.
    fn resolve_branch(&self, branch: Option<&str>) -> Result<(String, Option<Oid>), GitError> {
        if branch.is_none() && self.repo.head_detached()? {
            return Err(GitError::DetachedHead);
        }

        if self.branch_names()?.is_empty() {
            return Err(GitError::NoBranches);
        }

        if let Some(name) = branch {
            let found = self
                .repo
                .find_branch(name, BranchType::Local)
                .map_err(|_| GitError::InvalidReference {
                    reference: name.to_string(),
                })?;
            let tip = found.get().peel_to_commit()?.id();
            return Ok((name.to_string(), Some(tip)));
        }

        match self.repo.head() {
            Ok(head) => {
                let name = head.shorthand().unwrap_or("HEAD").to_string();
                let tip = head.peel_to_commit()?.id();
                Ok((name, Some(tip)))
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let name = head
                    .symbolic_target()
                    .map(|target| target.trim_start_matches(BRANCH_PREFIX))
                    .unwrap_or("HEAD")
                    .to_string();
                Ok((name, None))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Walk every commit reachable from `tip`, oldest first
    ///
    /// Commits whose committer time cannot be represented are skipped.
    fn walk_from(&self, tip: Oid) -> Result<Vec<RawCommit>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;
        revwalk.push(tip)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let git_commit = self.repo.find_commit(oid_result?)?;
            match extract_commit(&git_commit) {
                Some(commit) => commits.push(commit),
                None => warn!(
                    sha = %git_commit.id(),
                    seconds = git_commit.time().seconds(),
                    "Skipping commit with out-of-range commit time"
                ),
            }
        }
        Ok(commits)
    }
}

impl CommitSource for GitRepo {
    fn list_commits(&self, branch: Option<&str>) -> Result<BranchCommits, GitError> {
        let (branch, tip) = self.resolve_branch(branch)?;
        debug!(branch = %branch, tip = ?tip, "Resolved branch");

        let commits = match tip {
            Some(tip) => self.walk_from(tip)?,
            None => Vec::new(),
        };

        Ok(BranchCommits { branch, commits })
    }
}

/// Extract commit metadata from a git2 commit
///
/// Returns `None` when the committer time is outside the range `chrono` can
/// represent.
fn extract_commit(git_commit: &git2::Commit<'_>) -> Option<RawCommit> {
    let timestamp = commit_time(git_commit.time().seconds())?;
    let parents = git_commit.parent_ids().map(|id| id.to_string()).collect();

    Some(RawCommit::new(
        git_commit.id().to_string(),
        parents,
        timestamp,
        git_commit.message(),
    ))
}

fn commit_time(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
}
