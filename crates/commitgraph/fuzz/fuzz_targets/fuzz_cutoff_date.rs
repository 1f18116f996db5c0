#![no_main]

//! Fuzz target for cutoff date parsing
//!
//! Arbitrary strings must either parse to a midnight-UTC cutoff that
//! formats back to the same date, or fail with an error. Never panic.

use chrono::Timelike;
use commitgraph_git::Cutoff;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    if let Ok(cutoff) = Cutoff::parse(input) {
        assert_eq!(cutoff.instant().num_seconds_from_midnight(), 0);
        assert_eq!(cutoff.to_string(), input.trim());
    }
});
