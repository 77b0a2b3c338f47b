// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console rendering of probe results.

use std::io::Write;

use clap::ValueEnum;
use headcheck_runner::CommandResult;

use crate::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print the file probe's full result as one record.
///
/// Text form: `{ stdout: "...", err: null, stderr: "..." }`, with `err`
/// holding the quoted failure detail when the command failed.
pub fn write_file_report<W: Write>(
    out: &mut W,
    result: &CommandResult,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let err = match result.failure_detail() {
                Some(detail) => format!("{:?}", detail),
                None => "null".to_string(),
            };
            writeln!(
                out,
                "{{ {}: {:?}, {}: {}, {}: {:?} }}",
                color::context("stdout"),
                result.stdout(),
                color::context("err"),
                err,
                color::context("stderr"),
                result.stderr(),
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, result)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// What the branch probe prints, chosen from its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchReport {
    /// The command failed: failure detail goes to stderr, followed on stdout
    /// by whatever the command itself wrote to stderr.
    Failed { detail: String, stderr: String },
    /// Succeeded but wrote diagnostics: those go to stdout.
    Stderr(String),
    /// Clean success: the process argument list goes to stdout.
    Argv(Vec<String>),
}

impl BranchReport {
    pub fn from_result(result: &CommandResult, argv: &[String]) -> Self {
        if let Some(detail) = result.failure_detail() {
            return BranchReport::Failed {
                detail: detail.to_string(),
                stderr: result.stderr().to_string(),
            };
        }
        if !result.stderr().is_empty() {
            return BranchReport::Stderr(result.stderr().to_string());
        }
        BranchReport::Argv(argv.to_vec())
    }

    pub fn write<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> std::io::Result<()> {
        match self {
            BranchReport::Failed { detail, stderr } => {
                writeln!(err, "{}", detail)?;
                if stderr.is_empty() {
                    return Ok(());
                }
                writeln!(out, "{}", stderr.trim_end())
            }
            BranchReport::Stderr(text) => writeln!(out, "{}", text.trim_end()),
            BranchReport::Argv(argv) => writeln!(out, "{:?}", argv),
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
