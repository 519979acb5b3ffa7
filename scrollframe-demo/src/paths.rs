//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "scrollframe";
const APPLICATION: &str = "scrollframe-demo";

const LOG_FILE: &str = "scrollframe-demo.log";

/// Path of the demo's log file.
///
/// Lives in the cache directory (`~/.cache/scrollframe-demo` on Linux), or in
/// the working directory if that cannot be determined or created.
pub fn log_file() -> PathBuf {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join(LOG_FILE))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE))
}
