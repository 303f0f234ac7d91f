//! Tournament Runner
//!
//! This crate provides infrastructure for:
//! - Running matches between the classical and random engines
//! - Loading match settings from TOML
//! - Writing match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the classical and random engine
//! cargo run -p tournament -- classical random --games 10 --depth 3
//!
//! # Read settings from a file and keep the report
//! cargo run -p tournament -- classical random --config match.toml --out report.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::ConfigError;
pub use match_runner::*;
pub use results::*;
