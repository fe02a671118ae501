use std::fs::File;
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// File name of the session log, kept next to the store.
pub const LOG_FILE_NAME: &str = "doots.log";

/// Log file path for a given store path.
pub fn log_path_for(store_path: &Path) -> PathBuf {
    store_path.with_file_name(LOG_FILE_NAME)
}

/// Route `log` output to a file. The terminal belongs to the TUI, so nothing
/// is ever logged to stdout/stderr. Failure to create the file leaves logging off.
pub fn init_file_logger(path: &Path) -> bool {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match File::create(path) {
        Ok(file) => WriteLogger::init(LevelFilter::Debug, config, file).is_ok(),
        Err(_) => false,
    }
}
