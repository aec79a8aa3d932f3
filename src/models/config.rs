/// Configuration for a single fixer run
#[derive(Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
}

impl Config {
    /// Create a new configuration
    pub fn new(debug_mode: bool) -> Self {
        Self { debug_mode }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false)
    }
}
