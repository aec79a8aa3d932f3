use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::log;

/// Parse command line arguments into a runtime configuration
pub fn parse_args() -> Config {
    let args: Vec<String> = env::args().collect();

    Config::new(args.contains(&"--debug".to_string()))
}

/// Check whether help was requested on the command line
pub fn wants_help() -> bool {
    let args: Vec<String> = env::args().collect();

    args.contains(&"--help".to_string()) || args.contains(&"-h".to_string())
}

/// Get the font file path from the command line
///
/// The first non-flag argument is taken as the font path.
pub fn get_font_path(config: &Config) -> Result<PathBuf> {
    let args: Vec<String> = env::args().collect();

    for arg in args.iter().skip(1) {
        if !arg.starts_with("--") {
            let path = Path::new(arg).to_path_buf();
            if !path.is_file() {
                return Err(Error::InvalidPath(path));
            }
            log(config, format!("Using font file from command line: {}", path.display()));
            return Ok(path);
        }
    }

    Err(Error::Usage("expected a font file path argument".to_string()))
}

/// Get the help message for command-line usage
pub fn get_help_message(name: &str, summary: &str) -> String {
    format!(
        r#"{name} - {summary}

USAGE:
    {name} [OPTIONS] <FONT>

ARGS:
    <FONT>    Path to the font file, rewritten in place

OPTIONS:
    -h, --help    Show this help message
    --debug       Enable debug output
"#
    )
}
