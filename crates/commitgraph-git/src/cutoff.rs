// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Cutoff date handling
//!
//! A cutoff is a calendar date interpreted as midnight UTC. Commits whose
//! committer time is at or before that instant are in scope.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::GitError;

/// Accepted input format for cutoff dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive upper bound on commit time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cutoff(DateTime<Utc>);

impl Cutoff {
    /// Parse a `YYYY-MM-DD` date into a cutoff at 00:00:00 UTC
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidDate` if the input is not a valid calendar date.
    pub fn parse(input: &str) -> Result<Self, GitError> {
        let invalid = || GitError::InvalidDate {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        // chrono accepts signed and unpadded fields; insist on the full form
        if !is_padded_date(trimmed) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
        Ok(Self(midnight.and_utc()))
    }

    /// Build a cutoff from an exact instant
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// The cutoff instant
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Check whether a commit time falls within the cutoff
    #[must_use]
    pub fn includes(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp <= self.0
    }
}

/// `NNNN-NN-NN`, digits only
fn is_padded_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
