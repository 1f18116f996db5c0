// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test utilities for commitgraph-git integration tests
//!
//! Repositories are built directly with `git2` so that commit times are
//! fixed and tests do not depend on a `git` binary or on wall-clock time.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use git2::{Oid, Repository, Signature, Time};

// ============================================================================
// Temporary Directory Management
// ============================================================================

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary directory that is automatically cleaned up when dropped
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    /// Create a new, unique temporary test directory
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "commitgraph-git-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);
        fs::create_dir_all(&path).expect("Failed to create temp test directory");
        Self { path }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

// ============================================================================
// Git Repository Scaffolding
// ============================================================================

/// Seconds since the epoch for 2024-01-01T00:00:00Z
pub const JAN_1_2024: i64 = 1_704_067_200;

/// Seconds in a day
pub const DAY: i64 = 86_400;

/// A temporary git repository with commits at chosen times
pub struct TestGitRepo {
    temp_dir: TempTestDir,
    repo: Repository,
}

impl TestGitRepo {
    /// Create an empty repository whose HEAD points at the unborn `main`
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempTestDir::new(test_name);
        let repo = Repository::init(temp_dir.path()).expect("Failed to init repository");
        repo.set_head("refs/heads/main")
            .expect("Failed to point HEAD at main");
        Self { temp_dir, repo }
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a commit at `seconds` since the epoch without moving any ref
    pub fn commit_at(&self, message: &str, parents: &[&str], seconds: i64) -> String {
        let sig = Signature::new("Test Author", "test@example.com", &Time::new(seconds, 0))
            .expect("Failed to build signature");

        let tree_id = self
            .repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parents: Vec<git2::Commit<'_>> = parents
            .iter()
            .map(|sha| {
                let oid = Oid::from_str(sha).expect("Invalid parent sha");
                self.repo.find_commit(oid).expect("Parent commit not found")
            })
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        self.repo
            .commit(None, &sig, &sig, message, &tree, &parent_refs)
            .expect("Failed to create commit")
            .to_string()
    }

    /// Point (or create) a local branch at `sha`
    pub fn set_branch(&self, name: &str, sha: &str) {
        let oid = Oid::from_str(sha).expect("Invalid sha");
        self.repo
            .reference(&format!("refs/heads/{name}"), oid, true, "test")
            .expect("Failed to set branch");
    }

    /// Attach HEAD to a local branch
    pub fn checkout_branch(&self, name: &str) {
        self.repo
            .set_head(&format!("refs/heads/{name}"))
            .expect("Failed to set HEAD");
    }

    /// Detach HEAD at `sha`
    pub fn detach_head(&self, sha: &str) {
        let oid = Oid::from_str(sha).expect("Invalid sha");
        self.repo
            .set_head_detached(oid)
            .expect("Failed to detach HEAD");
    }

    /// Build a linear history on `branch`, one commit per day starting at
    /// `start`, and return the shas oldest first
    pub fn linear_history(&self, branch: &str, messages: &[&str], start: i64) -> Vec<String> {
        let mut shas: Vec<String> = Vec::new();
        for (i, message) in messages.iter().enumerate() {
            let parents: Vec<&str> = shas.last().map(String::as_str).into_iter().collect();
            let sha = self.commit_at(message, &parents, start + i as i64 * DAY);
            shas.push(sha);
        }
        if let Some(tip) = shas.last() {
            self.set_branch(branch, tip);
        }
        shas
    }
}

/// Create a bare repository in a fresh temp directory
pub fn bare_repo(test_name: &str) -> TempTestDir {
    let temp_dir = TempTestDir::new(test_name);
    Repository::init_bare(temp_dir.path()).expect("Failed to init bare repository");
    temp_dir
}
