//! Command-line front end for jsxsugar: argument parsing, configuration
//! layering and per-file transforms.

pub mod args;
pub mod config;
pub mod driver;
pub mod tracing_config;
