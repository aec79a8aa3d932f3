use crate::models::Config;

/// Print an informational message
pub fn info(message: String) {
    println!("[INFO] {}", message);
}

/// Log a debug message if debug mode is enabled
pub fn log(config: &Config, message: String) {
    if config.debug_mode {
        println!("[DEBUG] {}", message);
    }
}
