//! Name table rewriting

use write_fonts::from_obj::ToOwnedTable;
use write_fonts::read::types::NameId;
use write_fonts::read::{FontRef, TableProvider};
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::FontBuilder;

use super::restore_sfnt_version;
use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::{info, log};

/// License description recorded under nameID 13
pub const LICENSE: &str = "This Font Software is licensed under the SIL Open Font License, Version 1.1. This license is available with a FAQ at: http://scripts.sil.org/OFL";
/// Copyright notice recorded under nameID 0
pub const METADATA: &str = "Copyright 2020 The Cascadia Code Project Authors (https://github.com/microsoft/cascadia-code)";
/// Full font name recorded under nameID 4
pub const FULL_NAME: &str = "Caskaydia Cove Regular";
/// Family name recorded under nameID 1
pub const FAMILY_NAME: &str = "Caskaydia Cove";
/// Unique font identifier recorded under nameID 3
pub const UNIQUE_ID: &str = "4.300;SAJA;CaskaydiaCove-Regular";
/// PostScript name recorded under nameID 6
pub const POSTSCRIPT_NAME: &str = "CaskaydiaCove-Regular";

const WINDOWS_PLATFORM: u16 = 3;
const UNICODE_BMP_ENCODING: u16 = 1;
const US_ENGLISH: u16 = 0x409;

/// Replace or insert the Windows Unicode US-English record for one nameID
fn set_name(name: &mut Name, name_id: NameId, value: &str) {
    name.name_record.retain(|record| {
        record.name_id != name_id
            || record.platform_id != WINDOWS_PLATFORM
            || record.encoding_id != UNICODE_BMP_ENCODING
            || record.language_id != US_ENGLISH
    });
    name.name_record.push(NameRecord::new(
        WINDOWS_PLATFORM,
        UNICODE_BMP_ENCODING,
        US_ENGLISH,
        name_id,
        value.to_string().into(),
    ));
}

/// Rewrite the naming table records to the fixed release values
///
/// Returns the rebuilt font binary; every table other than `name` is carried
/// over from the input unchanged.
pub fn fix_name_table(data: &[u8], config: &Config) -> Result<Vec<u8>> {
    let font = FontRef::new(data).map_err(|e| Error::Font(e.to_string()))?;
    let mut name: Name = font
        .name()
        .map_err(|e| Error::Font(e.to_string()))?
        .to_owned_table();

    if name
        .name_record
        .iter()
        .any(|record| record.name_id == NameId::LICENSE_DESCRIPTION)
    {
        info("Found NameID 13: License Description".to_string());
    }

    set_name(&mut name, NameId::LICENSE_DESCRIPTION, LICENSE);
    set_name(&mut name, NameId::COPYRIGHT_NOTICE, METADATA);
    set_name(&mut name, NameId::FULL_NAME, FULL_NAME);
    set_name(&mut name, NameId::FAMILY_NAME, FAMILY_NAME);
    set_name(&mut name, NameId::UNIQUE_ID, UNIQUE_ID);
    set_name(&mut name, NameId::POSTSCRIPT_NAME, POSTSCRIPT_NAME);

    // the record array must stay sorted for the table to compile
    name.name_record.sort();

    log(config, format!("Rewrote name table with {} records", name.name_record.len()));

    let mut builder = FontBuilder::new();
    builder.add_table(&name).map_err(|e| Error::Font(e.to_string()))?;
    builder.copy_missing_tables(font);
    let mut out = builder.build();
    restore_sfnt_version(data, &mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_helpers::{build_test_font, sample_name, sample_os2, windows_record};
    use write_fonts::read::types::Tag;

    fn resolve_name(data: &[u8], name_id: NameId) -> Option<String> {
        let font = FontRef::new(data).unwrap();
        let name = font.name().unwrap();
        name.name_record().iter().find_map(|record| {
            (record.name_id() == name_id
                && record.platform_id() == WINDOWS_PLATFORM
                && record.encoding_id() == UNICODE_BMP_ENCODING
                && record.language_id() == US_ENGLISH)
                .then(|| {
                    record
                        .string(name.string_data())
                        .unwrap()
                        .chars()
                        .collect::<String>()
                })
        })
    }

    fn record_count(data: &[u8], name_id: NameId) -> usize {
        let font = FontRef::new(data).unwrap();
        let name = font.name().unwrap();
        name.name_record()
            .iter()
            .filter(|record| {
                record.name_id() == name_id
                    && record.platform_id() == WINDOWS_PLATFORM
                    && record.encoding_id() == UNICODE_BMP_ENCODING
                    && record.language_id() == US_ENGLISH
            })
            .count()
    }

    #[test]
    fn sets_all_six_records() {
        let data = build_test_font(&sample_os2(), &sample_name());
        let fixed = fix_name_table(&data, &Config::default()).unwrap();

        assert_eq!(resolve_name(&fixed, NameId::COPYRIGHT_NOTICE).as_deref(), Some(METADATA));
        assert_eq!(resolve_name(&fixed, NameId::FAMILY_NAME).as_deref(), Some(FAMILY_NAME));
        assert_eq!(resolve_name(&fixed, NameId::UNIQUE_ID).as_deref(), Some(UNIQUE_ID));
        assert_eq!(resolve_name(&fixed, NameId::FULL_NAME).as_deref(), Some(FULL_NAME));
        assert_eq!(resolve_name(&fixed, NameId::POSTSCRIPT_NAME).as_deref(), Some(POSTSCRIPT_NAME));
        assert_eq!(resolve_name(&fixed, NameId::LICENSE_DESCRIPTION).as_deref(), Some(LICENSE));
    }

    #[test]
    fn replaces_existing_records_without_duplicates() {
        // the sample name table already carries a family record
        let data = build_test_font(&sample_os2(), &sample_name());
        assert_eq!(resolve_name(&data, NameId::FAMILY_NAME).as_deref(), Some("Test Sans"));

        let fixed = fix_name_table(&data, &Config::default()).unwrap();

        assert_eq!(resolve_name(&fixed, NameId::FAMILY_NAME).as_deref(), Some(FAMILY_NAME));
        assert_eq!(record_count(&fixed, NameId::FAMILY_NAME), 1);
    }

    #[test]
    fn keeps_unrelated_records() {
        let data = build_test_font(&sample_os2(), &sample_name());
        let fixed = fix_name_table(&data, &Config::default()).unwrap();

        // the subfamily record is not one of the six and must survive
        assert_eq!(resolve_name(&fixed, NameId::SUBFAMILY_NAME).as_deref(), Some("Regular"));

        // the Macintosh-platform family record is a different identity
        let font = FontRef::new(&fixed).unwrap();
        let name = font.name().unwrap();
        let mac_family = name
            .name_record()
            .iter()
            .find(|record| record.platform_id() == 1 && record.name_id() == NameId::FAMILY_NAME)
            .expect("mac record should survive");
        assert_eq!(
            mac_family
                .string(name.string_data())
                .unwrap()
                .chars()
                .collect::<String>(),
            "Test Sans"
        );
    }

    #[test]
    fn overwrites_existing_license_record() {
        let mut name = sample_name();
        name.name_record
            .push(windows_record(NameId::LICENSE_DESCRIPTION, "All rights reserved"));
        name.name_record.sort();
        let data = build_test_font(&sample_os2(), &name);

        let fixed = fix_name_table(&data, &Config::default()).unwrap();

        assert_eq!(resolve_name(&fixed, NameId::LICENSE_DESCRIPTION).as_deref(), Some(LICENSE));
        assert_eq!(record_count(&fixed, NameId::LICENSE_DESCRIPTION), 1);
    }

    #[test]
    fn leaves_other_tables_untouched() {
        let data = build_test_font(&sample_os2(), &sample_name());
        let fixed = fix_name_table(&data, &Config::default()).unwrap();

        for tag in [b"OS/2", b"hhea", b"maxp"] {
            let tag = Tag::new(tag);
            let before = FontRef::new(&data).unwrap().data_for_tag(tag).unwrap();
            let after = FontRef::new(&fixed).unwrap().data_for_tag(tag).unwrap();
            assert_eq!(before.as_bytes(), after.as_bytes(), "table {tag} changed");
        }

        // head is identical apart from checksumAdjustment (bytes 8..12),
        // which is recomputed whenever the font is reassembled
        let tag = Tag::new(b"head");
        let mut before = FontRef::new(&data)
            .unwrap()
            .data_for_tag(tag)
            .unwrap()
            .as_bytes()
            .to_vec();
        let mut after = FontRef::new(&fixed)
            .unwrap()
            .data_for_tag(tag)
            .unwrap()
            .as_bytes()
            .to_vec();
        before[8..12].fill(0);
        after[8..12].fill(0);
        assert_eq!(before, after, "table head changed");
    }

    #[test]
    fn preserves_otto_sfnt_version() {
        let mut data = build_test_font(&sample_os2(), &sample_name());
        data[0..4].copy_from_slice(b"OTTO");

        let fixed = fix_name_table(&data, &Config::default()).unwrap();

        assert_eq!(&fixed[0..4], b"OTTO");
        assert_eq!(resolve_name(&fixed, NameId::FAMILY_NAME).as_deref(), Some(FAMILY_NAME));
    }

    #[test]
    fn is_idempotent() {
        let data = build_test_font(&sample_os2(), &sample_name());
        let once = fix_name_table(&data, &Config::default()).unwrap();
        let twice = fix_name_table(&once, &Config::default()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_non_font_data() {
        assert!(fix_name_table(b"not a font", &Config::default()).is_err());
    }
}
