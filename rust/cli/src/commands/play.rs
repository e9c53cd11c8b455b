//! # Play Command
//!
//! Records a single hand from line-oriented input. Each line names one
//! command (see [`crate::validation`]); the engine decides whether it is
//! legal, and the resulting pot, actor and options are printed after every
//! accepted command. Rejections go to stderr and leave the hand unchanged.
//!
//! On EOF or `q` the hand is appended to `--output` as one JSONL record.
//! Quitting before the hand is complete exits with code 130.

use std::io::{BufRead, Write};

use sixmax_engine::engine::Hand;
use sixmax_engine::result::HandResult;
use sixmax_engine::seat::Seat;
use tracing::{debug, info, warn};

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_result, format_status, format_table};
use crate::history::{HandLogger, HandRecord};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{PlayInput, parse_play_line};

const HELP: &str = "\
Commands:
  <SEAT> fold|check|call        e.g. BTN call
  <SEAT> bet|raise <bb>         e.g. CO raise 2.5 (raise sizes are totals)
  board [cards...]              confirm the next street's board
  result <SEAT> <pot bb> [hero-won|hero-lost] [SEAT=card,card ...]
  state                         show the table
  q                             finish and save";

/// Handle the play command.
///
/// `hero` and `stack` override the configured values when given.
pub fn handle_play_command(
    hero: Option<String>,
    stack: Option<String>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| {
        let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
        CliError::Config(e.to_string())
    })?;

    let hero = match hero {
        Some(h) => Some(h.parse::<Seat>().map_err(|e| {
            let _ = ui::write_error(err, &e.to_string());
            CliError::InvalidInput(e.to_string())
        })?),
        None => cfg.hero,
    };
    let stack = match stack {
        Some(s) => config::parse_stack(&s).map_err(|e| {
            let _ = ui::write_error(err, &e.to_string());
            CliError::InvalidInput(e.to_string())
        })?,
        None => cfg.starting_stack,
    };
    if stack.is_zero() {
        ui::write_error(err, "stack must be > 0")?;
        return Err(CliError::InvalidInput("stack must be > 0".to_string()));
    }

    // open the log first so a bad path fails before any input is consumed
    let mut logger = match &output {
        Some(path) => Some(HandLogger::open(path)?),
        None => None,
    };

    let mut hand = Hand::new(hero, stack);
    info!(hero = ?hero, stack = %stack, "session started");
    writeln!(
        out,
        "play: hero={} stack={}bb",
        hero.map(|s| s.as_str()).unwrap_or("-"),
        stack
    )?;
    writeln!(out, "{}", format_status(&hand))?;

    let label = |hand: &Hand| hand.snapshot().phase.to_string();
    loop {
        ui::prompt(out, &label(&hand))?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        if line.is_empty() {
            continue;
        }
        match parse_play_line(&line) {
            PlayInput::Quit => break,
            PlayInput::Help => writeln!(out, "{}", HELP)?,
            PlayInput::State => writeln!(out, "{}", format_table(&hand))?,
            PlayInput::Invalid(msg) => ui::write_error(err, &msg)?,
            PlayInput::Action { seat, action, size } => {
                let before = hand.snapshot().phase;
                match hand.add_action(seat, action, size) {
                    Ok(emitted) => {
                        for record in &emitted {
                            writeln!(out, "{}", format_action(record))?;
                        }
                        let after = hand.snapshot();
                        if after.phase != before || after.is_complete {
                            debug!(from = %before, to = %after.phase, stage = ?after.stage, "street closed");
                        }
                        writeln!(out, "{}", format_status(&hand))?;
                    }
                    Err(e) => {
                        warn!(seat = %seat, action = %action, error = %e, "command rejected");
                        ui::write_error(err, &e.to_string())?;
                    }
                }
            }
            PlayInput::Board(cards) => {
                if !hand.snapshot().waiting_for_board {
                    warn!(action = "board", "command rejected");
                    ui::write_error(err, "No board is pending")?;
                    continue;
                }
                hand.confirm_board_with(cards);
                let after = hand.snapshot();
                debug!(phase = %after.phase, stage = ?after.stage, "board confirmed");
                writeln!(out, "{}", format_status(&hand))?;
            }
            PlayInput::Result {
                winner,
                pot,
                hero_won,
                showdown_hands,
            } => {
                let result = HandResult {
                    winner,
                    hero_won: hero_won.unwrap_or(hero == Some(winner)),
                    pot_awarded: pot,
                    showdown_hands,
                };
                match hand.set_hand_result(result) {
                    Ok(()) => {
                        if let Some(r) = hand.hand_result() {
                            writeln!(out, "{}", format_result(r))?;
                        }
                    }
                    Err(e) => {
                        warn!(seat = %winner, action = "result", error = %e, "command rejected");
                        ui::write_error(err, &e.to_string())?;
                    }
                }
            }
        }
    }

    let state = hand.snapshot();
    if let Some(logger) = logger.as_mut()
        && !hand.commands().is_empty()
    {
        let id = logger.next_id();
        logger.write(&HandRecord::from_hand(id.clone(), &hand))?;
        writeln!(out, "Saved hand {} to {}", id, logger.path())?;
    }
    info!(
        complete = state.is_complete,
        commands = hand.commands().len(),
        pot = %state.pot,
        "session finished"
    );

    if !state.is_complete {
        let msg = format!("hand left unfinished on the {}", state.phase);
        ui::display_warning(err, &msg)?;
        return Err(CliError::Interrupted(msg));
    }
    if hand.is_ready_for_result() {
        ui::display_warning(err, "hand complete but no result recorded")?;
    }
    Ok(())
}
