//! commitgraph: render a git branch's commit history as a Mermaid graph
//!
//! Reads every commit of a branch up to a cutoff date, numbers the commits
//! chronologically and writes a `graph TD;` document linking each commit to
//! its parents.

use std::process::ExitCode;

use clap::Parser;
use commitgraph::app;
use commitgraph::config::Config;
use tracing::debug;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Parsed configuration");

    match app::run(&config) {
        Ok(summary) => {
            println!("Dependency graph saved to {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
