//! Command-line interface handling

mod args;

pub use args::{get_font_path, get_help_message, parse_args, wants_help};
