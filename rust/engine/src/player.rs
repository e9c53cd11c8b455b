use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chips::Chips;
use crate::seat::Seat;
use crate::street::Phase;

/// Represents a player action during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if nothing to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting on a street
    Bet,
    /// Raise to a new total contribution
    Raise,
}

impl ActionType {
    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionType::Bet | ActionType::Raise)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Fold => "fold",
            ActionType::Check => "check",
            ActionType::Call => "call",
            ActionType::Bet => "bet",
            ActionType::Raise => "raise",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" | "f" => Ok(ActionType::Fold),
            "check" | "x" => Ok(ActionType::Check),
            "call" | "c" => Ok(ActionType::Call),
            "bet" | "b" => Ok(ActionType::Bet),
            "raise" | "r" => Ok(ActionType::Raise),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
}

/// Per-seat ledger for one hand.
///
/// `stack` is what the seat has behind, `contributed` what it has put in on
/// the current street and `total_contributed` what it has put in over the
/// whole hand. A folded seat never comes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Seat,
    pub stack: Chips,
    pub contributed: Chips,
    pub total_contributed: Chips,
    pub folded: bool,
    pub is_hero: bool,
    pub acted_this_street: bool,
}

impl Player {
    pub fn new(position: Seat, stack: Chips, is_hero: bool) -> Self {
        Self {
            position,
            stack,
            contributed: Chips::ZERO,
            total_contributed: Chips::ZERO,
            folded: false,
            is_hero,
            acted_this_street: false,
        }
    }

    /// Moves chips from the stack into the pot and returns how many moved.
    /// Never takes more than the stack holds.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.contributed += moved;
        self.total_contributed += moved;
        moved
    }

    pub fn is_all_in(&self) -> bool {
        self.stack.is_zero()
    }

    /// Still holding cards
    pub fn is_active(&self) -> bool {
        !self.folded
    }

    /// Still holding cards and chips to act with
    pub fn can_act(&self) -> bool {
        !self.folded && !self.stack.is_zero()
    }

    /// Chips needed to match `current_bet`
    pub fn to_call(&self, current_bet: Chips) -> Chips {
        current_bet.saturating_sub(self.contributed)
    }

    pub fn reset_street(&mut self) {
        self.contributed = Chips::ZERO;
        self.acted_this_street = false;
    }
}

/// One committed action. Records are append-only and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number within the hand, starting at 1
    pub id: u32,
    pub position: Seat,
    #[serde(rename = "type")]
    pub action: ActionType,
    /// Chips actually moved, after all-in clamping
    pub bet_size: Chips,
    /// Pot after this action
    pub pot_size: Chips,
    pub phase: Phase,
    /// Folded by the preflop skip rather than by the caller
    #[serde(default)]
    pub auto: bool,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_clamps_to_stack() {
        let mut p = Player::new(Seat::Co, Chips(300), false);
        assert_eq!(p.commit(Chips(500)), Chips(300));
        assert!(p.is_all_in());
        assert_eq!(p.contributed, Chips(300));
        assert_eq!(p.total_contributed, Chips(300));
        assert!(p.is_active());
        assert!(!p.can_act());
    }

    #[test]
    fn reset_street_keeps_hand_totals() {
        let mut p = Player::new(Seat::Bb, Chips::DEFAULT_STACK, true);
        p.commit(Chips::BIG_BLIND);
        p.acted_this_street = true;
        p.reset_street();
        assert_eq!(p.contributed, Chips::ZERO);
        assert_eq!(p.total_contributed, Chips::BIG_BLIND);
        assert!(!p.acted_this_street);
    }

    #[test]
    fn to_call_never_underflows() {
        let mut p = Player::new(Seat::Sb, Chips::DEFAULT_STACK, false);
        p.commit(Chips(400));
        assert_eq!(p.to_call(Chips(300)), Chips::ZERO);
        assert_eq!(p.to_call(Chips(1000)), Chips(600));
    }

    #[test]
    fn action_types_parse_from_short_and_long_names() {
        assert_eq!("raise".parse::<ActionType>().unwrap(), ActionType::Raise);
        assert_eq!("X".parse::<ActionType>().unwrap(), ActionType::Check);
        assert!("shove".parse::<ActionType>().is_err());
        assert!(ActionType::Bet.is_aggressive());
        assert!(!ActionType::Call.is_aggressive());
    }
}
