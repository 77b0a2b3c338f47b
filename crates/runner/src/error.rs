// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single subprocess failure kind.

/// Why a subprocess did not succeed.
///
/// Never returned from [`crate::CommandRunner::run`]; its display text is
/// captured into [`crate::CommandResult::failure_detail`].
#[derive(Debug, thiserror::Error)]
pub enum SubprocessFailure {
    /// Program not found, not executable, or its pipes could not be read.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed { command: String, source: std::io::Error },

    /// The program ran and exited with a non-zero status.
    #[error("command `{command}` failed with exit code {exit_code}")]
    Exited { command: String, exit_code: i32 },

    /// The program was terminated before it could exit (e.g. by a signal).
    #[error("command `{command}` was terminated ({status})")]
    Terminated { command: String, status: String },
}

impl SubprocessFailure {
    /// The command line that failed, as displayed in logs.
    pub fn command(&self) -> &str {
        match self {
            SubprocessFailure::SpawnFailed { command, .. }
            | SubprocessFailure::Exited { command, .. }
            | SubprocessFailure::Terminated { command, .. } => command,
        }
    }

    /// Exit code, when the process exited on its own.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            SubprocessFailure::Exited { exit_code, .. } => Some(*exit_code),
            SubprocessFailure::SpawnFailed { .. } | SubprocessFailure::Terminated { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
