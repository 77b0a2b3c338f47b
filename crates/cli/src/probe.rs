// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The two probes and their concurrent dispatch.

use std::ffi::OsStr;
use std::io::Write;

use headcheck_runner::{CommandLine, CommandResult, CommandRunner};
use tokio::sync::mpsc;

use crate::report::{self, BranchReport, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// `cat` on the first positional argument
    File,
    /// Current branch name of the working directory's repository
    Branch,
}

/// A finished probe, sent on the completion channel.
#[derive(Debug)]
pub struct Completion {
    pub probe: Probe,
    pub result: CommandResult,
}

/// `cat <path>`; bare `cat` (reading an empty stdin) when no path was given.
pub fn cat_command(path: Option<&OsStr>) -> CommandLine {
    let cmd = CommandLine::new("cat");
    match path {
        Some(path) => cmd.arg(path),
        None => cmd,
    }
}

pub fn branch_command() -> CommandLine {
    CommandLine::new("git").args(["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Start both probes without waiting on either.
///
/// Completions arrive on the returned channel in whichever order the
/// subprocesses finish. The channel closes after both have been sent.
pub fn dispatch<R: CommandRunner>(runner: &R, path: Option<&OsStr>) -> mpsc::Receiver<Completion> {
    let (tx, rx) = mpsc::channel(2);
    for (probe, cmd) in [(Probe::File, cat_command(path)), (Probe::Branch, branch_command())] {
        let handle = headcheck_runner::spawn(runner, cmd);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(?probe, error = %e, "probe task did not complete");
                    return;
                }
            };
            tracing::debug!(?probe, failed = result.is_failed(), "probe finished");
            if tx.send(Completion { probe, result }).await.is_err() {
                tracing::warn!(?probe, "completion dropped: receiver closed");
            }
        });
    }
    rx
}

/// Report each completion as it arrives until the channel closes.
pub async fn report_all<O: Write, E: Write>(
    mut completions: mpsc::Receiver<Completion>,
    out: &mut O,
    err: &mut E,
    format: OutputFormat,
    argv: &[String],
) -> anyhow::Result<()> {
    while let Some(Completion { probe, result }) = completions.recv().await {
        match probe {
            Probe::File => report::write_file_report(out, &result, format)?,
            Probe::Branch => BranchReport::from_result(&result, argv).write(out, err)?,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
