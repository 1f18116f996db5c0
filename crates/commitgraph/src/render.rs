//! Mermaid rendering
//!
//! Turns a numbered commit history into a `graph TD;` document. Every commit
//! becomes a node `C{ordinal}`, followed directly by one edge per parent
//! that is part of the history. Parents outside the history are skipped.
//!
//! # Example
//!
//! ```
//! use commitgraph::render::{RenderOptions, render};
//!
//! let diagram = render(&[], &RenderOptions::default());
//! assert_eq!(diagram.text, "graph TD;\n");
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use commitgraph_git::CommitRecord;

/// First line of every document
pub const HEADER: &str = "graph TD;";

const INDENT: &str = "    ";

/// What follows `#{ordinal}: ` in a node label
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelStyle {
    /// First line of the commit message, or the short hash when empty
    #[default]
    Message,
    /// Short commit hash
    Hash,
}

/// Rendering options
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label text style
    pub labels: LabelStyle,
}

/// A rendered document and what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    /// Complete Mermaid text, newline terminated
    pub text: String,
    /// Node declarations emitted
    pub nodes: usize,
    /// Edges emitted
    pub edges: usize,
    /// Parent links skipped because the parent is not in the history
    pub dropped_edges: usize,
}

/// Node identifier for an ordinal
#[must_use]
pub fn node_id(ordinal: usize) -> String {
    format!("C{ordinal}")
}

/// Render commits, given in ordinal order, as a Mermaid graph
#[must_use]
pub fn render(commits: &[CommitRecord], options: &RenderOptions) -> Diagram {
    let ordinals: HashMap<&str, usize> = commits
        .iter()
        .map(|c| (c.hash.as_str(), c.ordinal))
        .collect();

    let mut text = String::new();
    let mut edges = 0;
    let mut dropped_edges = 0;

    text.push_str(HEADER);
    text.push('\n');

    for commit in commits {
        let id = node_id(commit.ordinal);
        // Writing to a String cannot fail
        let _ = writeln!(
            text,
            "{INDENT}{id}[\"#{}: {}\"];",
            commit.ordinal,
            label_text(commit, options.labels)
        );

        for parent in &commit.parents {
            match ordinals.get(parent.as_str()) {
                Some(&parent_ordinal) => {
                    let _ = writeln!(text, "{INDENT}{id} --> {};", node_id(parent_ordinal));
                    edges += 1;
                }
                None => dropped_edges += 1,
            }
        }
    }

    Diagram {
        text,
        nodes: commits.len(),
        edges,
        dropped_edges,
    }
}

fn label_text(commit: &CommitRecord, style: LabelStyle) -> String {
    match (style, commit.message.as_deref()) {
        (LabelStyle::Message, Some(message)) if !message.is_empty() => escape_label(message),
        _ => commit.short_hash().to_string(),
    }
}

/// Escape text for use inside a quoted Mermaid label
///
/// `"` and `#` become entity codes; control characters become spaces.
#[must_use]
pub fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("#quot;"),
            '#' => escaped.push_str("#35;"),
            c if c.is_control() => escaped.push(' '),
            c => escaped.push(c),
        }
    }
    escaped
}
