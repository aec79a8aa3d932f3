use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Config;
use crate::utils::logging::log;

/// Build the temporary sibling path used while overwriting a file
fn temp_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Safely overwrite a file by writing to a temporary sibling first
///
/// The data is written next to the destination and renamed over it, so a
/// failed write leaves the original file intact.
pub fn safe_write_file(dest: &Path, data: &[u8], config: &Config) -> Result<()> {
    let tmp = temp_path(dest);
    fs::write(&tmp, data)?;

    // First try to rename over the destination (fast path)
    match fs::rename(&tmp, dest) {
        Ok(_) => Ok(()),
        Err(e) => {
            // If rename fails, log it and fall back to a direct rewrite
            log(
                config,
                format!("Rename failed for {}, rewriting directly: {}", dest.display(), e),
            );

            fs::write(dest, data)?;

            match fs::remove_file(&tmp) {
                Ok(_) => Ok(()),
                Err(e) => {
                    log(
                        config,
                        format!("Warning: Could not delete temporary file {}: {}", tmp.display(), e),
                    );
                    // We still consider this a success since the file was written
                    Ok(())
                }
            }
        }
    }
}
