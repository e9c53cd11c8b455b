//! # sixmax CLI Library
//!
//! Command-line front end for the `sixmax-engine` hand recorder. It turns
//! typed lines into engine commands, renders the engine's snapshots, and reads
//! and writes JSONL hand histories.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and dispatches to a subcommand;
//! [`run_with_input`] does the same with an explicit stdin for `play`.
//!
//! ```
//! use std::io::{self, Cursor};
//!
//! let script = "BTN raise 2.5\nSB fold\nBB fold\nresult BTN 4\nq\n";
//! let mut stdin = Cursor::new(script);
//! let mut out = Vec::new();
//! let code = sixmax_cli::run_with_input(
//!     ["sixmax", "play", "--hero", "BTN", "--stack", "100"],
//!     &mut stdin,
//!     &mut out,
//!     &mut io::sink(),
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Winner: BTN (4bb) hero won"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: record one hand from stdin
//! - `replay`: rebuild recorded hands and print them
//! - `verify`: check recorded hands against a fresh replay
//! - `export`: flatten recorded actions to CSV or JSON
//! - `cfg`: show the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod history;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, SixmaxCli};
use commands::{
    handle_cfg_command, handle_export_command, handle_play_command, handle_replay_command,
    handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "replay", "verify", "export", "cfg"];

/// Main entry point: parses `args` and runs the subcommand, reading `play`
/// input from the process stdin.
///
/// Returns `0` on success, `2` on errors and `130` when a `play` session ends
/// before its hand is complete.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SixmaxCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let name = cli.cmd.name();
    let result = match cli.cmd {
        Commands::Play {
            hero,
            stack,
            output,
        } => handle_play_command(hero, stack, output, out, err, stdin),
        Commands::Replay { input } => handle_replay_command(input, out, err),
        Commands::Verify { input } => handle_verify_command(input, out, err),
        Commands::Export {
            input,
            format,
            output,
        } => handle_export_command(input, output, format, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(command = name, error = %e, "command failed");
            // handlers already explain interruptions themselves
            if !matches!(e, CliError::Interrupted(_)) && ui::write_error(err, &e.to_string()).is_err()
            {
                return exit_code::ERROR;
            }
            e.exit_code()
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut usage = format!("{}\nsixmax hand recorder\nUsage: sixmax <command> [options]\n\nCommands:\n", e);
    for c in COMMANDS {
        usage.push_str(&format!("  {}\n", c));
    }
    usage.push_str("\nFor full help, run: sixmax --help");
    if writeln!(err, "{}", usage).is_err() {
        return exit_code::ERROR;
    }
    exit_code::ERROR
}
