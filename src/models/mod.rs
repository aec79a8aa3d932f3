//! Shared data types for the fixer binaries

mod config;

pub use config::Config;
