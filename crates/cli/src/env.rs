// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use tracing_subscriber::EnvFilter;

/// Variable holding the log filter directive (e.g. `debug`, `headcheck_runner=trace`).
pub const LOG_ENV: &str = "HEADCHECK_LOG";

/// Filter used when `HEADCHECK_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter: `HEADCHECK_LOG` > `warn`
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Color override: `NO_COLOR=1` forces off, then `COLOR=1` forces on.
/// `None` means decide from the terminal.
pub fn color_override() -> Option<bool> {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return Some(false);
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return Some(true);
    }
    None
}

/// Install the stderr log subscriber. Reports own stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
