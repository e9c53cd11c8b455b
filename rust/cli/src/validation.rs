//! Parsing of the line-oriented `play` input.
//!
//! ```text
//! <SEAT> fold|check|call          BTN call
//! <SEAT> bet|raise <BB>           CO raise 2.5
//! board [cards...]                board Ah Kd 7c
//! result <SEAT> <BB> [hero-won] [SEAT=cards...]
//! state | help | q
//! ```
//!
//! Amounts are in big blinds. Everything here is syntax only; whether the
//! command is legal is decided by the engine.

use sixmax_engine::chips::Chips;
use sixmax_engine::player::ActionType;
use sixmax_engine::result::ShowdownHand;
use sixmax_engine::seat::Seat;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayInput {
    Action {
        seat: Seat,
        action: ActionType,
        size: Option<Chips>,
    },
    Board(Vec<String>),
    Result {
        winner: Seat,
        pot: Chips,
        hero_won: Option<bool>,
        showdown_hands: Vec<ShowdownHand>,
    },
    State,
    Help,
    Quit,
    Invalid(String),
}

/// Parse one line of `play` input.
///
/// ```rust
/// use sixmax_cli::validation::{parse_play_line, PlayInput};
/// use sixmax_engine::chips::Chips;
/// use sixmax_engine::player::ActionType;
/// use sixmax_engine::seat::Seat;
///
/// assert_eq!(
///     parse_play_line("btn raise 3"),
///     PlayInput::Action {
///         seat: Seat::Btn,
///         action: ActionType::Raise,
///         size: Some(Chips(300)),
///     }
/// );
/// assert_eq!(parse_play_line("q"), PlayInput::Quit);
/// assert!(matches!(parse_play_line("UTG shove"), PlayInput::Invalid(_)));
/// ```
pub fn parse_play_line(input: &str) -> PlayInput {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(head) = parts.first() else {
        return PlayInput::Invalid("Empty input".to_string());
    };

    match head.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return PlayInput::Quit,
        "state" | "s" => return PlayInput::State,
        "help" | "?" => return PlayInput::Help,
        "board" => return PlayInput::Board(parts[1..].iter().map(|c| c.to_string()).collect()),
        "result" => return parse_result(&parts[1..]),
        _ => {}
    }

    let seat = match head.parse::<Seat>() {
        Ok(seat) => seat,
        Err(e) => return PlayInput::Invalid(e.to_string()),
    };
    let Some(word) = parts.get(1) else {
        return PlayInput::Invalid(format!(
            "Missing action for {} (fold, check, call, bet <bb>, raise <bb>)",
            seat
        ));
    };
    let action = match word.parse::<ActionType>() {
        Ok(a) => a,
        Err(e) => return PlayInput::Invalid(e),
    };
    let size = match (action.is_aggressive(), parts.get(2)) {
        (true, Some(amount)) => match amount.parse::<Chips>() {
            Ok(c) => Some(c),
            Err(e) => return PlayInput::Invalid(format!("Invalid {} size: {}", action, e)),
        },
        (true, None) => {
            return PlayInput::Invalid(format!(
                "{} requires a size in big blinds (e.g. '{} {} 3')",
                action, seat, action
            ));
        }
        (false, Some(extra)) => {
            return PlayInput::Invalid(format!("{} takes no size (got '{}')", action, extra));
        }
        (false, None) => None,
    };
    if parts.len() > 3 {
        return PlayInput::Invalid(format!("Unexpected input after '{}'", parts[..3].join(" ")));
    }
    PlayInput::Action { seat, action, size }
}

fn parse_result(args: &[&str]) -> PlayInput {
    const USAGE: &str = "Usage: result <SEAT> <pot bb> [hero-won] [SEAT=card,card ...]";
    let (Some(winner), Some(pot)) = (args.first(), args.get(1)) else {
        return PlayInput::Invalid(USAGE.to_string());
    };
    let winner = match winner.parse::<Seat>() {
        Ok(s) => s,
        Err(e) => return PlayInput::Invalid(e.to_string()),
    };
    let pot = match pot.parse::<Chips>() {
        Ok(c) => c,
        Err(e) => return PlayInput::Invalid(format!("Invalid pot: {}", e)),
    };

    let mut hero_won = None;
    let mut showdown_hands = Vec::new();
    for extra in &args[2..] {
        if extra.eq_ignore_ascii_case("hero-won") {
            hero_won = Some(true);
        } else if extra.eq_ignore_ascii_case("hero-lost") {
            hero_won = Some(false);
        } else if let Some((seat, cards)) = extra.split_once('=') {
            match seat.parse::<Seat>() {
                Ok(seat) => showdown_hands.push(ShowdownHand {
                    seat,
                    cards: cards
                        .split(',')
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect(),
                }),
                Err(e) => return PlayInput::Invalid(e.to_string()),
            }
        } else {
            return PlayInput::Invalid(format!("Unexpected '{}'. {}", extra, USAGE));
        }
    }

    PlayInput::Result {
        winner,
        pot,
        hero_won,
        showdown_hands,
    }
}
