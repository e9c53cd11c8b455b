use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chips::Chips;
use crate::player::ActionRecord;
use crate::seat::Seat;

/// Represents a betting street in Texas Hold'em poker.
/// Streets are strictly ordered and a hand only ever moves forward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Phase {
    /// The following street, or `None` on the river
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Preflop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => None,
        }
    }

    pub fn prev(self) -> Option<Phase> {
        match self {
            Phase::Preflop => None,
            Phase::Flop => Some(Phase::Preflop),
            Phase::Turn => Some(Phase::Flop),
            Phase::River => Some(Phase::Turn),
        }
    }

    pub fn is_final(self) -> bool {
        self == Phase::River
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
        };
        f.write_str(name)
    }
}

/// Betting context of the street currently in play.
///
/// Invariant: `pot == starting_pot + Σ contributed` over all seats for the
/// street in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub phase: Phase,
    pub pot: Chips,
    /// Pot carried in from earlier streets
    pub starting_pot: Chips,
    /// Contribution every seat must match to stay in
    pub current_bet: Chips,
    pub last_aggressor: Option<Seat>,
    pub actions: Vec<ActionRecord>,
    /// Bets and raises on this street
    pub raise_count: u32,
}

impl Street {
    pub fn preflop() -> Self {
        Self {
            phase: Phase::Preflop,
            pot: Chips::ZERO,
            starting_pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            last_aggressor: None,
            actions: Vec::new(),
            raise_count: 0,
        }
    }

    /// Opens `phase` carrying the whole pot forward
    pub fn advance_to(&mut self, phase: Phase) {
        self.phase = phase;
        self.starting_pot = self.pot;
        self.current_bet = Chips::ZERO;
        self.last_aggressor = None;
        self.actions.clear();
        self.raise_count = 0;
    }

    /// Chips added to the pot since the street opened
    pub fn added(&self) -> Chips {
        self.pot - self.starting_pot
    }

    /// Display label for the next aggressive action on this street
    pub fn raise_label(&self) -> String {
        match (self.phase, self.raise_count) {
            (Phase::Preflop, 0) => "Open".to_string(),
            (Phase::Preflop, n) => format!("{}-bet", n + 2),
            (_, 0) => "Bet".to_string(),
            (_, 1) => "Raise".to_string(),
            _ => "Re-raise".to_string(),
        }
    }
}
