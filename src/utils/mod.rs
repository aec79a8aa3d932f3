pub mod file;
pub mod logging;

pub use file::safe_write_file;
pub use logging::{info, log};
