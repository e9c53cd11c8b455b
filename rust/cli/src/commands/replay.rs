//! Replay command handler.
//!
//! Rebuilds every recorded hand from its command log and prints the action
//! list, board and result the engine produces. Records that fail to parse or
//! whose commands are rejected are reported and skipped; the command fails
//! if any were.

use std::io::Write;

use tracing::{debug, warn};

use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_chips, format_result};
use crate::history::{HandRecord, parse_records};
use crate::io_utils::read_text_auto;
use crate::ui;

pub fn handle_replay_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input).inspect_err(|e| {
        let _ = ui::write_error(err, &format!("Failed to read {}: {}", input, e));
    })?;

    let records = parse_records(&content);
    if records.is_empty() {
        writeln!(out, "No hands found in file.")?;
        return Ok(());
    }

    let mut failed = 0usize;
    for (line_no, parsed) in records.iter() {
        let record = match parsed {
            Ok(r) => r,
            Err(e) => {
                failed += 1;
                ui::write_error(err, &format!("Failed to parse line {}: {}", line_no, e))?;
                continue;
            }
        };
        if let Err(e) = replay_one(record, out) {
            failed += 1;
            warn!(hand_id = %record.hand_id, error = %e, "replay rejected");
            ui::write_error(err, &format!("Hand {}: {}", record.hand_id, e))?;
        }
    }

    writeln!(out, "Replayed {} of {} hands", records.len() - failed, records.len())?;
    if failed > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} of {} hands could not be replayed",
            failed,
            records.len()
        )));
    }
    Ok(())
}

fn replay_one(record: &HandRecord, out: &mut dyn Write) -> Result<(), CliError> {
    let hand = record.replay()?;
    let state = hand.snapshot();
    debug!(hand_id = %record.hand_id, commands = record.commands.len(), "hand rebuilt");

    writeln!(
        out,
        "Hand {} (hero: {}, stack: {})",
        record.hand_id,
        record.hero.map(|s| s.as_str()).unwrap_or("-"),
        format_chips(record.starting_stack)
    )?;
    writeln!(out, "═══════════════════════════════════════")?;
    for action in &state.actions {
        writeln!(out, "  {}", format_action(action))?;
    }
    writeln!(out, "Board: {}", format_board(&state.board))?;
    writeln!(out, "Pot: {}", format_chips(state.pot))?;
    if state.is_complete {
        writeln!(out, "Ended by: {}", hand.completion_type())?;
    } else {
        writeln!(out, "Unfinished ({})", state.phase)?;
    }
    match hand.hand_result() {
        Some(result) => writeln!(out, "{}", format_result(result))?,
        None => writeln!(out, "No result recorded")?,
    }
    writeln!(out)?;
    Ok(())
}
