//! Command handler modules for the sixmax CLI.
//!
//! Each subcommand lives in its own file and exposes one
//! `handle_<name>_command` function. Output streams (and stdin for `play`)
//! are passed in so tests can drive handlers with in-memory buffers, and
//! every failure comes back as a [`CliError`](crate::error::CliError).

mod cfg;
mod export;
mod play;
mod replay;
mod verify;

pub use cfg::handle_cfg_command;
pub use export::handle_export_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use verify::handle_verify_command;
