// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution with captured output.
//!
//! A [`CommandLine`] is an explicit argument vector; it is never joined into a
//! shell string. Running one yields a [`CommandResult`] holding both output
//! streams and the failure indicator. Failures are captured, not returned.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod command;
mod error;
mod result;
mod run;

pub use command::CommandLine;
pub use error::SubprocessFailure;
pub use result::CommandResult;
pub use run::{spawn, CommandRunner, ProcessRunner};

#[cfg(any(test, feature = "test-support"))]
pub use run::{FakeRunner, RunCall};
