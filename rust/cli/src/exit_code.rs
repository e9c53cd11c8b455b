//! Process exit codes shared by every command.

/// Command finished normally.
pub const SUCCESS: i32 = 0;

/// Bad input, unreadable file, rejected record, or a failed write.
pub const ERROR: i32 = 2;

/// The session was cut short (quit before the hand finished).
pub const INTERRUPTED: i32 = 130;
