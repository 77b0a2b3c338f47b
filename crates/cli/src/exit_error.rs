// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! `run()` returns `ExitError` instead of calling `std::process::exit()`,
//! leaving termination to `main()`.

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit with `code` and print nothing further.
    pub fn silent(code: i32) -> Self {
        Self { code, message: String::new() }
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
