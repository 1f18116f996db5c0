#![no_main]

//! Fuzz target for label escaping
//!
//! Arbitrary commit messages must never break the one-line-per-node layout
//! of the rendered document.

use chrono::{DateTime, Utc};
use commitgraph::render::{RenderOptions, render};
use commitgraph_git::RawCommit;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|message: &str| {
    let commit = RawCommit::new("a".repeat(40), vec![], DateTime::<Utc>::UNIX_EPOCH, Some(message))
        .into_record(1);
    let diagram = render(&[commit], &RenderOptions::default());

    assert_eq!(diagram.text.lines().count(), 2);
    let node = diagram.text.lines().nth(1).unwrap_or_default();
    assert!(node.starts_with("    C1[\"#1: "));
    assert!(node.ends_with("\"];"));
    assert_eq!(node.matches('"').count(), 2);
});
