// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

/// Default cosmetic delay before the interactive scan shows its result.
pub const DEFAULT_SCAN_DELAY_MS: u64 = 1200;

/// Runtime settings resolved from command line flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Pause inserted before the engine runs in the TUI. It never changes the report.
    pub scan_delay: Duration,
    /// Where exported documents are written.
    pub export_dir: PathBuf,
}

impl Settings {
    pub fn new(scan_delay_ms: u64, export_dir: Option<PathBuf>) -> Self {
        Self {
            scan_delay: Duration::from_millis(scan_delay_ms),
            export_dir: export_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_DELAY_MS, None)
    }
}
