// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! commitgraph-git: commit history loading for commitgraph
//!
//! This library crate reads the history of a git branch up to a cutoff date
//! and returns it as a chronologically numbered list of commits.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use commitgraph_git::{Cutoff, GitRepo, load_history};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let cutoff = Cutoff::parse("2024-06-01").expect("parse date");
//! let history = load_history(&repo, None, &cutoff).expect("load history");
//!
//! for c in &history.commits {
//!     println!("#{} {}", c.ordinal, c.short_hash());
//! }
//! ```

pub mod commit;
pub mod cutoff;
pub mod error;
pub mod history;
pub mod repo;

pub use commit::{CommitRecord, RawCommit};
pub use cutoff::Cutoff;
pub use error::GitError;
pub use history::{BranchCommits, CommitSource, History, load_history, number_commits};
pub use repo::GitRepo;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::{CommitRecord, RawCommit};
    pub use crate::cutoff::Cutoff;
    pub use crate::error::GitError;
    pub use crate::history::{CommitSource, History, load_history};
    pub use crate::repo::GitRepo;
}
