// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running command lines as child processes.

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::{CommandLine, CommandResult, SubprocessFailure};

/// Executes a command line and captures its outcome.
///
/// Implementations never return an error: spawn and exit failures are folded
/// into the returned [`CommandResult`].
#[async_trait]
pub trait CommandRunner: Clone + Send + Sync + 'static {
    /// Run to completion. There is no timeout; this waits for the child to exit.
    async fn run(&self, cmd: &CommandLine) -> CommandResult;
}

/// Runs commands as real OS processes via `tokio::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, cmd: &CommandLine) -> CommandResult {
        let command = cmd.to_string();
        tracing::debug!(%command, "spawning subprocess");

        let output = match cmd.to_tokio().output().await {
            Ok(output) => output,
            Err(source) => {
                let failure = SubprocessFailure::SpawnFailed { command, source };
                tracing::debug!(error = %failure, "subprocess did not start");
                return CommandResult::failed(&failure, "", "");
            }
        };

        // No encoding negotiation: invalid UTF-8 is replaced, not rejected.
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            tracing::debug!(%command, stdout_len = stdout.len(), "subprocess succeeded");
            return CommandResult::succeeded(stdout, stderr);
        }

        let failure = match output.status.code() {
            Some(exit_code) => SubprocessFailure::Exited { command, exit_code },
            None => SubprocessFailure::Terminated { command, status: output.status.to_string() },
        };
        tracing::debug!(error = %failure, stderr = %stderr.trim(), "subprocess failed");
        CommandResult::failed(&failure, stdout, stderr)
    }
}

/// Dispatch `cmd` on the tokio runtime without waiting for it.
///
/// The returned handle resolves to the result once the child exits. Each
/// dispatch owns its own child and buffers.
pub fn spawn<R: CommandRunner>(runner: &R, cmd: CommandLine) -> JoinHandle<CommandResult> {
    let runner = runner.clone();
    tokio::spawn(async move { runner.run(&cmd).await })
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::CommandRunner;
    use crate::{CommandLine, CommandResult};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Recorded invocation
    #[derive(Debug, Clone)]
    pub struct RunCall {
        pub command: CommandLine,
    }

    #[derive(Default)]
    struct FakeRunnerState {
        calls: Vec<RunCall>,
        scripted: HashMap<String, CommandResult>,
    }

    /// Fake runner for testing. Unscripted commands succeed with empty output.
    #[derive(Clone, Default)]
    pub struct FakeRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script the result for a command, matched on its displayed form
        /// (e.g. `"git rev-parse --abbrev-ref HEAD"`).
        pub fn script(&self, command: &str, result: CommandResult) {
            self.inner.lock().scripted.insert(command.to_string(), result);
        }

        /// Get all recorded invocations
        pub fn calls(&self) -> Vec<RunCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, cmd: &CommandLine) -> CommandResult {
            let mut inner = self.inner.lock();
            inner.calls.push(RunCall { command: cmd.clone() });
            inner
                .scripted
                .get(&cmd.to_string())
                .cloned()
                .unwrap_or_else(|| CommandResult::succeeded("", ""))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRunner, RunCall};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
