//! Utilities for normalizing font metadata to fixed build values.
//!
//! Each binary in this crate opens a compiled font, overwrites a small set of
//! metadata fields and rewrites the file in place:
//!
//! - `fix_name_table` rewrites the naming-table records for the release
//! - `fix_typo_metrics` overwrites the OS/2 typographic ascender
//! - `fix_win_metrics` overwrites the OS/2 Windows ascent and descent

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
