//! OS/2 vertical metrics rewriting

use write_fonts::read::{FontRef, TableProvider, TopLevelTable};
use write_fonts::tables::os2::Os2;
use write_fonts::FontBuilder;

use super::restore_sfnt_version;
use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::{info, log};

/// Fixed typographic ascender applied by `fix_typo_metrics`
pub const TYPO_ASCENDER: i16 = 1977;
/// Fixed Windows ascent applied by `fix_win_metrics`
pub const WIN_ASCENT: u16 = 2280;
/// Fixed Windows descent applied by `fix_win_metrics`
pub const WIN_DESCENT: u16 = 1220;

/// Splice a big-endian field value into the raw table bytes
///
/// Editing in place keeps every other OS/2 field, the version included,
/// byte-for-byte as loaded.
fn splice(bytes: &mut [u8], range: std::ops::Range<usize>, value: [u8; 2]) {
    bytes[range].copy_from_slice(&value);
}

fn rebuild(font: FontRef, os2_bytes: Vec<u8>, input: &[u8], config: &Config) -> Result<Vec<u8>> {
    log(config, "Rebuilding font with updated OS/2 table".to_string());

    let mut builder = FontBuilder::new();
    builder.add_raw(Os2::TAG, os2_bytes);
    builder.copy_missing_tables(font);
    let mut out = builder.build();
    restore_sfnt_version(input, &mut out);
    Ok(out)
}

/// Overwrite the typographic ascender with the fixed release value
pub fn fix_typo_metrics(data: &[u8], config: &Config) -> Result<Vec<u8>> {
    let font = FontRef::new(data).map_err(|e| Error::Font(e.to_string()))?;
    let os2 = font.os2().map_err(|e| Error::Font(e.to_string()))?;
    let mut bytes = os2.offset_data().as_bytes().to_vec();

    info(format!("Current sTypoAscender: {}", os2.s_typo_ascender()));
    splice(
        &mut bytes,
        os2.shape().s_typo_ascender_byte_range(),
        TYPO_ASCENDER.to_be_bytes(),
    );
    info(format!("New sTypoAscender: {}", TYPO_ASCENDER));

    rebuild(font, bytes, data, config)
}

/// Overwrite the Windows ascent and descent with the fixed release values
pub fn fix_win_metrics(data: &[u8], config: &Config) -> Result<Vec<u8>> {
    let font = FontRef::new(data).map_err(|e| Error::Font(e.to_string()))?;
    let os2 = font.os2().map_err(|e| Error::Font(e.to_string()))?;
    let mut bytes = os2.offset_data().as_bytes().to_vec();

    info(format!("Current usWinAscent: {}", os2.us_win_ascent()));
    splice(
        &mut bytes,
        os2.shape().us_win_ascent_byte_range(),
        WIN_ASCENT.to_be_bytes(),
    );
    info(format!("New usWinAscent: {}", WIN_ASCENT));

    info(format!("Current usWinDescent: {}", os2.us_win_descent()));
    splice(
        &mut bytes,
        os2.shape().us_win_descent_byte_range(),
        WIN_DESCENT.to_be_bytes(),
    );
    info(format!("New usWinDescent: {}", WIN_DESCENT));

    rebuild(font, bytes, data, config)
}
