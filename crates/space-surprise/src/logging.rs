//! Log setup.
//!
//! The terminal is in the alternate screen for the whole run, so log records
//! go to a file in the data directory instead of stderr. `RUST_LOG` picks the
//! filter as usual.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use env_logger::{Env, Target};

/// Log file name inside the data directory.
const LOG_FILE: &str = "space-surprise.log";

/// Path of the log file.
pub fn log_path() -> Option<PathBuf> {
    surprise_config::data_dir().ok().map(|dir| dir.join(LOG_FILE))
}

fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Route `log` records to the log file. Logging stays off if the file
/// cannot be opened.
pub fn init() {
    let Some(file) = open_log_file() else {
        return;
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
}
