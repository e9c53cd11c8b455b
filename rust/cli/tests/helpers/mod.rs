//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: [`cli_runner::CliRunner`] runs the built `sixmax` binary with
//!   piped stdin and a clean `SIXMAX_*` environment, capturing stdout, stderr
//!   and the exit code.
//! - `temp_files`: [`temp_files::TempFileManager`] hands out paths inside a
//!   temporary directory that is removed on drop.

pub mod cli_runner;
pub mod temp_files;
