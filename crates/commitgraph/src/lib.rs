//! commitgraph library
//!
//! This module exports the core functionality of commitgraph for use in
//! integration tests and as a library.

pub mod app;
pub mod config;
pub mod render;
