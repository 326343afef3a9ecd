// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);
/// [`DEFAULT_POLL_INTERVAL`] as written on the command line.
pub const DEFAULT_POLL_SECONDS: &str = "0.25";

/// Settings for one run, fixed once the command line is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitConfig {
    /// Device node to wait on; `None` means "the only optical drive".
    pub device: Option<PathBuf>,
    pub poll_interval: Duration,
    /// Suppress the "using", "waiting" and "got it" messages.
    pub quiet: bool,
    pub close_tray: bool,
    /// Print the discovered drives and exit.
    pub list: bool,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            device: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            quiet: false,
            close_tray: false,
            list: false,
        }
    }
}

/// Parse a poll interval in (fractional) seconds. Must be finite and above zero.
pub fn parse_poll_interval(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("poll interval must be positive, got '{value}'"));
    }

    Duration::try_from_secs_f64(seconds).map_err(|e| format!("'{value}': {e}"))
}
