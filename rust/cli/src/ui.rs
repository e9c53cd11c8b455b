//! Small output helpers shared by the commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prompt shown before each line of `play` input
pub fn prompt(out: &mut dyn Write, label: &str) -> std::io::Result<()> {
    write!(out, "{}> ", label)?;
    out.flush()
}
