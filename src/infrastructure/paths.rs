//! Data paths for the plugin.

use std::path::PathBuf;

/// File name of the OTLP trace log.
pub const TRACE_FILE_NAME: &str = "reelscout-otlp.json";

/// Returns the plugin data directory, `~/.local/share/zellij/reelscout` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("reelscout")
}

/// Returns the path of the active trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}
