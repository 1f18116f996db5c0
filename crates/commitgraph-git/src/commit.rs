//! Commit record types

use chrono::{DateTime, Utc};

/// Length of the abbreviated hash used in labels
pub const SHORT_HASH_LEN: usize = 7;

/// A commit as read from a repository, before numbering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    /// The commit SHA (40 hex characters)
    pub hash: String,
    /// Parent commit SHAs, in parent order
    pub parents: Vec<String>,
    /// Committer timestamp
    pub timestamp: DateTime<Utc>,
    /// First line of the commit message, if any
    pub message: Option<String>,
}

impl RawCommit {
    /// Build a raw commit, keeping only the first non-empty message line
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        parents: Vec<String>,
        timestamp: DateTime<Utc>,
        message: Option<&str>,
    ) -> Self {
        Self {
            hash: hash.into(),
            parents,
            timestamp,
            message: message.and_then(summary_line),
        }
    }

    /// Attach an ordinal, producing the final record
    #[must_use]
    pub fn into_record(self, ordinal: usize) -> CommitRecord {
        CommitRecord {
            hash: self.hash,
            parents: self.parents,
            timestamp: self.timestamp,
            message: self.message,
            ordinal,
        }
    }
}

/// A commit in scope for rendering, numbered by commit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// The commit SHA (40 hex characters)
    pub hash: String,
    /// Parent commit SHAs; may reference commits outside the loaded set
    pub parents: Vec<String>,
    /// Committer timestamp
    pub timestamp: DateTime<Utc>,
    /// First line of the commit message, if any
    pub message: Option<String>,
    /// 1-based position in ascending timestamp order
    pub ordinal: usize,
}

impl CommitRecord {
    /// Get the short hash (first 7 characters)
    #[must_use]
    pub fn short_hash(&self) -> &str {
        &self.hash[..SHORT_HASH_LEN.min(self.hash.len())]
    }

    /// Commit date as `YYYY-MM-DD`
    #[must_use]
    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// Check if this is a merge commit (has multiple parents)
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

fn summary_line(message: &str) -> Option<String> {
    message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: short_hash returns at most 7 characters and is a prefix
        #[test]
        fn prop_short_hash_is_prefix(hash in "[0-9a-f]{1,40}") {
            let record = RawCommit::new(hash.clone(), vec![], Utc::now(), None).into_record(1);
            let short = record.short_hash();
            prop_assert!(short.len() <= SHORT_HASH_LEN);
            prop_assert!(hash.starts_with(short));
        }

        /// Property: a kept message is a single trimmed, non-empty line
        #[test]
        fn prop_message_is_single_line(message in ".*(\n.*){0,3}") {
            let raw = RawCommit::new("a", vec![], Utc::now(), Some(&message));
            if let Some(line) = raw.message {
                prop_assert!(!line.is_empty());
                prop_assert!(!line.contains('\n'));
                prop_assert_eq!(line.trim(), line.as_str());
            }
        }
    }
}
