use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chips::Chips;
use crate::seat::Seat;

/// Cards one seat showed down with. Card strings are opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownHand {
    pub seat: Seat,
    pub cards: Vec<String>,
}

/// Outcome of a finished hand, supplied by whoever settled it.
///
/// The engine only gates when it may be recorded; it never computes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub winner: Seat,
    pub hero_won: bool,
    pub pot_awarded: Chips,
    #[serde(default)]
    pub showdown_hands: Vec<ShowdownHand>,
}

/// How a terminal hand ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionType {
    /// Everyone else folded
    Fold,
    /// Two or more seats all-in with no betting left
    Allin,
    /// River betting closed with cards to compare
    Showdown,
}

impl fmt::Display for CompletionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompletionType::Fold => "fold",
            CompletionType::Allin => "allin",
            CompletionType::Showdown => "showdown",
        };
        f.write_str(name)
    }
}
