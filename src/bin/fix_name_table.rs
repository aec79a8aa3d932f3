use std::error::Error;

use fontfix::cli::{get_font_path, get_help_message, parse_args, wants_help};
use fontfix::font::{fix_name_table, load_font_data, save_font_data};

fn main() -> Result<(), Box<dyn Error>> {
    if wants_help() {
        println!(
            "{}",
            get_help_message(
                "fix_name_table",
                "Rewrite naming-table records to the fixed release values",
            )
        );
        return Ok(());
    }

    let config = parse_args();
    let font_path = get_font_path(&config)?;

    let data = load_font_data(&font_path, &config)?;
    let fixed = fix_name_table(&data, &config)?;
    save_font_data(&font_path, &fixed, &config)?;

    Ok(())
}
