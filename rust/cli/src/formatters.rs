//! Text rendering of hand state for the terminal.
//!
//! Everything here reads the engine's snapshot and query API only; nothing
//! is computed that the engine does not already expose.

use sixmax_engine::chips::Chips;
use sixmax_engine::engine::Hand;
use sixmax_engine::player::{ActionRecord, ActionType, Player};
use sixmax_engine::result::HandResult;
use sixmax_engine::state::HandSnapshot;

/// `4.5bb`
pub fn format_chips(chips: Chips) -> String {
    format!("{}bb", chips)
}

/// One action as a history line, e.g. `[preflop] BTN raise 3bb (pot 4.5bb)`.
/// Skip folds are marked `(auto)`.
///
/// ```rust
/// use chrono::Utc;
/// use sixmax_cli::formatters::format_action;
/// use sixmax_engine::chips::Chips;
/// use sixmax_engine::player::{ActionRecord, ActionType};
/// use sixmax_engine::seat::Seat;
/// use sixmax_engine::street::Phase;
///
/// let record = ActionRecord {
///     id: 4,
///     position: Seat::Btn,
///     action: ActionType::Raise,
///     bet_size: Chips(300),
///     pot_size: Chips(450),
///     phase: Phase::Preflop,
///     auto: false,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(format_action(&record), "[preflop] BTN raise 3bb (pot 4.5bb)");
/// ```
pub fn format_action(record: &ActionRecord) -> String {
    let mut line = format!("[{}] {} {}", record.phase, record.position, record.action);
    if !record.bet_size.is_zero() {
        line.push(' ');
        line.push_str(&format_chips(record.bet_size));
    }
    line.push_str(&format!(" (pot {})", format_chips(record.pot_size)));
    if record.auto {
        line.push_str(" (auto)");
    }
    line
}

pub fn format_board(board: &[String]) -> String {
    if board.is_empty() {
        "[]".to_string()
    } else {
        format!("[{}]", board.join(" "))
    }
}

fn format_player(p: &Player) -> String {
    let status = if p.folded {
        "folded"
    } else if p.is_all_in() {
        "all-in"
    } else {
        "in"
    };
    let hero = if p.is_hero { "*" } else { " " };
    format!(
        "{}{:<3} stack {:>8}  street {:>7}  {}",
        hero,
        p.position.as_str(),
        format_chips(p.stack),
        format_chips(p.contributed),
        status
    )
}

pub fn format_options(options: &[ActionType]) -> String {
    options
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join("/")
}

/// The status block printed after every accepted command
pub fn format_status(hand: &Hand) -> String {
    let state: HandSnapshot = hand.snapshot();
    let pot = hand.pot_details();
    let mut lines = vec![format!(
        "{} | pot {} (this street {}) | to match {} | board {}",
        state.phase,
        format_chips(pot.total_pot),
        format_chips(pot.added_this_street),
        format_chips(state.current_bet),
        format_board(&state.board)
    )];

    if state.is_complete {
        lines.push(format!(
            "Hand complete ({}). Enter: result <SEAT> <pot bb>",
            hand.completion_type()
        ));
    } else if state.waiting_for_board {
        lines.push(format!("Waiting for the {} board. Enter: board [cards]", state.phase));
    } else if let Some(actor) = state.current_actor {
        let options = hand.available_actions(actor);
        lines.push(format!(
            "Action on {}: {} (next aggressive action: {})",
            actor,
            format_options(&options),
            hand.raise_label()
        ));
    }
    lines.join("\n")
}

/// Full table view for the `state` command
pub fn format_table(hand: &Hand) -> String {
    let state = hand.snapshot();
    let mut lines: Vec<String> = state.players.iter().map(format_player).collect();
    lines.push(format_status(hand));
    lines.join("\n")
}

pub fn format_result(result: &HandResult) -> String {
    let mut line = format!(
        "Winner: {} ({}){}",
        result.winner,
        format_chips(result.pot_awarded),
        if result.hero_won { " hero won" } else { "" }
    );
    for hand in &result.showdown_hands {
        line.push_str(&format!("\n  {} shows {}", hand.seat, hand.cards.join(" ")));
    }
    line
}
