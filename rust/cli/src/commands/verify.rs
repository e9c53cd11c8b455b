//! Verify command handler module.
//!
//! Replays every record of a hand history and checks it against what the
//! engine produces today:
//!
//! - hand ids are well formed (`YYYYMMDD-NNNNNN`) and unique
//! - the command log replays without a rejection
//! - the rebuilt actions (timestamps included), board and completion match
//!   the stored ones
//! - chips are conserved: the pot equals the sum of all contributions and no
//!   seat ends with more or less than its starting stack accounts for
//! - a recorded result never awards more than the pot
//!
//! Every failure is collected and reported; the command fails if any exist.

use std::collections::HashSet;
use std::io::Write;

use sixmax_engine::chips::Chips;
use sixmax_engine::engine::Hand;

use crate::error::{BatchValidationError, CliError};
use crate::history::{HandRecord, is_valid_hand_id, parse_records};
use crate::io_utils::read_text_auto;
use crate::ui;

/// Context is the 1-based line number of the record.
type VerifyError = BatchValidationError<usize>;

pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input).inspect_err(|e| {
        let _ = ui::write_error(err, &format!("Failed to read {}: {}", input, e));
    })?;

    let mut errors: Vec<VerifyError> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let records = parse_records(&content);

    for (line_no, parsed) in &records {
        let mut fail = |message: String| {
            errors.push(VerifyError {
                item_context: *line_no,
                message,
            })
        };
        let record = match parsed {
            Ok(r) => r,
            Err(e) => {
                fail(format!("Invalid JSON record: {}", e));
                continue;
            }
        };
        if !is_valid_hand_id(&record.hand_id) {
            fail(format!("Invalid hand_id '{}'", record.hand_id));
        }
        if !seen_ids.insert(record.hand_id.clone()) {
            fail(format!("Duplicate hand_id '{}'", record.hand_id));
        }
        match record.replay() {
            Ok(hand) => check_hand(record, &hand).into_iter().for_each(&mut fail),
            Err(e) => fail(format!("Command log rejected: {}", e)),
        }
    }

    if errors.is_empty() {
        writeln!(out, "Verify: OK ({} hands)", records.len())?;
        return Ok(());
    }
    for e in &errors {
        ui::write_error(err, &format!("line {}", e))?;
    }
    writeln!(
        out,
        "Verify: FAILED ({} problems in {} hands)",
        errors.len(),
        records.len()
    )?;
    Err(CliError::InvalidInput(format!(
        "{} verification errors",
        errors.len()
    )))
}

fn check_hand(record: &HandRecord, hand: &Hand) -> Vec<String> {
    let mut problems = Vec::new();
    let state = hand.snapshot();

    if record.actions.len() != state.actions.len() {
        problems.push(format!(
            "Stored {} actions but replay produced {}",
            record.actions.len(),
            state.actions.len()
        ));
    } else if let Some((stored, rebuilt)) = record
        .actions
        .iter()
        .zip(state.actions.iter())
        .find(|(a, b)| a != b)
    {
        problems.push(format!(
            "Action {} differs: stored {:?}, replay {:?}",
            stored.id, stored, rebuilt
        ));
    }

    if record.board != state.board {
        problems.push(format!(
            "Board differs: stored {:?}, replay {:?}",
            record.board, state.board
        ));
    }

    let contributed: Chips = state.players.iter().map(|p| p.total_contributed).sum();
    if contributed != state.pot {
        problems.push(format!(
            "Pot {} does not match contributions {}",
            state.pot, contributed
        ));
    }
    for p in &state.players {
        if p.stack + p.total_contributed != record.starting_stack {
            problems.push(format!("{} chips do not add up to the starting stack", p.position));
        }
    }

    let completion = state.is_complete.then(|| hand.completion_type());
    if record.completion.is_some() && record.completion != completion {
        problems.push(format!(
            "Completion differs: stored {:?}, replay {:?}",
            record.completion, completion
        ));
    }

    match (&record.result, hand.hand_result()) {
        (Some(stored), Some(rebuilt)) if stored != rebuilt => {
            problems.push("Result differs from the replayed SetResult".to_string());
        }
        (Some(_), None) => problems.push("Result stored without a SetResult command".to_string()),
        _ => {}
    }
    if let Some(result) = hand.hand_result()
        && result.pot_awarded > state.pot
    {
        problems.push(format!(
            "Result awards {} from a pot of {}",
            result.pot_awarded, state.pot
        ));
    }

    problems
}
