use crate::chips::Chips;
use crate::seat::Seat;
use crate::street::Phase;
use thiserror::Error;

/// Every failure the hand engine can report.
///
/// All variants are raised before any state is touched, so the hand that
/// rejected a command is still usable for the next one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Illegal action by {seat}: {reason}")]
    IllegalAction { seat: Seat, reason: IllegalReason },
    #[error("Invalid amount for {seat}: {reason}")]
    InvalidAmount { seat: Seat, reason: AmountReason },
    #[error("{operation} is not available during {phase}")]
    PhaseMismatch {
        operation: &'static str,
        phase: Phase,
    },
    #[error("Invalid hand state: {0}")]
    State(StateReason),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IllegalReason {
    #[error("not this seat's turn (expected {expected})")]
    OutOfTurn { expected: Seat },
    #[error("no action is pending")]
    NoActionPending,
    #[error("seat has already folded")]
    AlreadyFolded,
    #[error("seat has no chips left")]
    NoChips,
    #[error("cannot fold when checking is possible")]
    FoldWhenCheckAvailable,
    #[error("cannot bet into an existing bet, raise instead")]
    BetFacingBet,
    #[error("nothing to raise, bet instead")]
    RaiseWithoutBet,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AmountReason {
    #[error("a size is required")]
    MissingSize,
    #[error("size must be positive")]
    NonPositive,
    #[error("nothing to call")]
    NothingToCall,
    #[error("cannot check facing a bet")]
    CheckFacingBet,
    #[error("raise must exceed the current bet")]
    RaiseNotAboveBet,
    #[error("raise does not add chips")]
    RaiseAddsNothing,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StateReason {
    #[error("the hand is not complete")]
    HandNotComplete,
    #[error("a result has already been recorded")]
    ResultAlreadyRecorded,
    #[error("starting stack is above the {max}bb limit")]
    StackTooLarge { max: Chips },
}
