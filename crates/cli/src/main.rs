// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! headcheck: print a file and the current git branch.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod env;
mod exit_error;
mod probe;
mod report;

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;
use headcheck_runner::ProcessRunner;

use crate::exit_error::ExitError;
use crate::report::OutputFormat;

/// Status returned once both probes are reported, whichever branch was taken.
const PROBE_EXIT_CODE: i32 = 1;

/// Print a file and the current git branch.
#[derive(Parser, Debug)]
#[command(name = "headcheck", version, styles = color::styles())]
struct Cli {
    /// Positional arguments; the first is the file handed to `cat`
    #[arg(value_name = "ARGS")]
    args: Vec<OsString>,

    /// Report format for the file probe
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    env::init_tracing();

    if let Err(e) = run(cli).await {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let path = cli.args.first().map(OsString::as_os_str);
    let argv: Vec<String> =
        std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()).collect();
    tracing::debug!(?path, format = ?cli.output, "dispatching probes");

    let completions = probe::dispatch(&ProcessRunner::new(), path);
    // Unlocked handles: probe tasks may log to stderr while reports are pending.
    let (mut stdout, mut stderr) = (std::io::stdout(), std::io::stderr());
    probe::report_all(completions, &mut stdout, &mut stderr, cli.output, &argv)
        .await
        .map_err(|e| ExitError::new(PROBE_EXIT_CODE, format!("failed to write report: {:#}", e)))?;

    Err(ExitError::silent(PROBE_EXIT_CODE).into())
}
