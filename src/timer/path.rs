use crate::cli::config::{DEFAULT_TIMER, TIMER_EXTENSION};
use std::path::{Path, PathBuf};

/// Maps a timer name to the file holding its start instant.
///
/// Names starting with `/` are used verbatim, anything else lands under
/// `directory`. An empty name selects the default timer. The name is not
/// sanitized.
pub fn resolve(directory: &Path, name: &str) -> PathBuf {
    if name.starts_with('/') {
        PathBuf::from(format!("{name}.{TIMER_EXTENSION}"))
    } else {
        let base = if name.is_empty() { DEFAULT_TIMER } else { name };
        directory.join(format!("{base}.{TIMER_EXTENSION}"))
    }
}
