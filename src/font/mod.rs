//! Font loading, rewriting and persistence

pub mod metrics;
pub mod name;

pub use metrics::{fix_typo_metrics, fix_win_metrics};
pub use name::fix_name_table;

use std::fs;
use std::path::Path;

use ttf_parser::Face;

use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::{log, safe_write_file};

/// Read a font file into memory, checking that it is a parseable font
pub fn load_font_data(path: &Path, config: &Config) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::InvalidPath(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    let is_valid_magic = data.len() >= 4
        && (data[0..4] == [0x00, 0x01, 0x00, 0x00] || // TTF
            data[0..4] == [0x4F, 0x54, 0x54, 0x4F]); // OTF
    if !is_valid_magic {
        return Err(Error::Font(format!("{} is not a font file", path.display())));
    }

    if let Err(e) = Face::parse(&data, 0) {
        return Err(Error::Font(format!("failed to parse {}: {}", path.display(), e)));
    }

    log(config, format!("Loaded font file: {}", path.display()));
    Ok(data)
}

/// Write rebuilt font data back to its original path
pub fn save_font_data(path: &Path, data: &[u8], config: &Config) -> Result<()> {
    safe_write_file(path, data, config)?;
    log(config, format!("Saved font file: {}", path.display()));
    Ok(())
}

/// Carry the input's sfnt version tag over to a rebuilt font
///
/// `FontBuilder::build` always writes the TrueType sfnt version, but a
/// CFF-flavored input must keep its OTTO tag.
pub(crate) fn restore_sfnt_version(input: &[u8], output: &mut [u8]) {
    if input.len() >= 4 && output.len() >= 4 && input[0..4] != output[0..4] {
        output[0..4].copy_from_slice(&input[0..4]);
    }
}
