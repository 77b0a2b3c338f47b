// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured outcome of one subprocess invocation.

use serde::Serialize;

use crate::SubprocessFailure;

/// Output streams and failure state of a finished subprocess.
///
/// `failed` is true iff the process could not be started or did not exit with
/// status 0, and `failure_detail` is populated exactly when `failed` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    stdout: String,
    stderr: String,
    failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
}

impl CommandResult {
    /// A zero-status outcome.
    pub fn succeeded(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            failed: false,
            failure_detail: None,
            exit_code: Some(0),
        }
    }

    /// A failed outcome; streams hold whatever the process wrote before failing.
    pub fn failed(
        failure: &SubprocessFailure,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            failed: true,
            failure_detail: Some(failure.to_string()),
            exit_code: failure.exit_code(),
        }
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn failure_detail(&self) -> Option<&str> {
        self.failure_detail.as_deref()
    }

    /// Numeric status if the process exited on its own.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}
