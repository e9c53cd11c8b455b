use crate::chips::Chips;
use crate::errors::{AmountReason, HandError, IllegalReason};
use crate::player::{ActionType, Player};
use crate::street::Street;

/// An action that passed validation, carrying the chips it will actually
/// move after all-in clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(Chips),
    Bet(Chips),
    /// Increment added on top of the seat's current contribution
    Raise(Chips),
}

impl ValidatedAction {
    pub fn action_type(self) -> ActionType {
        match self {
            ValidatedAction::Fold => ActionType::Fold,
            ValidatedAction::Check => ActionType::Check,
            ValidatedAction::Call(_) => ActionType::Call,
            ValidatedAction::Bet(_) => ActionType::Bet,
            ValidatedAction::Raise(_) => ActionType::Raise,
        }
    }

    /// Chips this action moves into the pot
    pub fn amount(self) -> Chips {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => Chips::ZERO,
            ValidatedAction::Call(a) | ValidatedAction::Bet(a) | ValidatedAction::Raise(a) => a,
        }
    }
}

/// Validates a seat's action against the street's betting contract.
///
/// `forced` marks folds issued by the preflop skip, which may fold a seat
/// that could have checked. Nothing is mutated here; a validated action is
/// applied with [`apply_action`].
///
/// `size` is the bet amount for [`ActionType::Bet`] and the total target
/// contribution for [`ActionType::Raise`]. Both clamp to the seat's stack.
///
/// # Examples
///
/// ```
/// use sixmax_engine::chips::Chips;
/// use sixmax_engine::player::{ActionType, Player};
/// use sixmax_engine::rules::{validate_action, ValidatedAction};
/// use sixmax_engine::seat::Seat;
///
/// let co = Player::new(Seat::Co, Chips(500), false);
/// // raise to 30bb with only 5bb behind: all-in for the stack
/// let va = validate_action(&co, Chips(300), ActionType::Raise, Some(Chips(3000)), false).unwrap();
/// assert_eq!(va, ValidatedAction::Raise(Chips(500)));
///
/// // calling short of the full price is an all-in call
/// let va = validate_action(&co, Chips(800), ActionType::Call, None, false).unwrap();
/// assert_eq!(va, ValidatedAction::Call(Chips(500)));
/// ```
pub fn validate_action(
    player: &Player,
    current_bet: Chips,
    action: ActionType,
    size: Option<Chips>,
    forced: bool,
) -> Result<ValidatedAction, HandError> {
    let seat = player.position;
    let illegal = |reason| HandError::IllegalAction { seat, reason };
    let invalid = |reason| HandError::InvalidAmount { seat, reason };

    if player.folded {
        return Err(illegal(IllegalReason::AlreadyFolded));
    }
    if player.is_all_in() {
        return Err(illegal(IllegalReason::NoChips));
    }
    let to_call = player.to_call(current_bet);

    match action {
        ActionType::Fold => {
            if to_call.is_zero() && !forced {
                Err(illegal(IllegalReason::FoldWhenCheckAvailable))
            } else {
                Ok(ValidatedAction::Fold)
            }
        }
        ActionType::Check => {
            if to_call.is_zero() {
                Ok(ValidatedAction::Check)
            } else {
                Err(invalid(AmountReason::CheckFacingBet))
            }
        }
        ActionType::Call => {
            if to_call.is_zero() {
                return Err(invalid(AmountReason::NothingToCall));
            }
            Ok(ValidatedAction::Call(to_call.min(player.stack)))
        }
        ActionType::Bet => {
            if !current_bet.is_zero() {
                return Err(illegal(IllegalReason::BetFacingBet));
            }
            let size = positive_size(size).map_err(invalid)?;
            Ok(ValidatedAction::Bet(size.min(player.stack)))
        }
        ActionType::Raise => {
            if current_bet.is_zero() {
                return Err(illegal(IllegalReason::RaiseWithoutBet));
            }
            let size = positive_size(size).map_err(invalid)?;
            let total = size.min(player.stack + player.contributed);
            let increment = total.saturating_sub(player.contributed).min(player.stack);
            if increment.is_zero() {
                return Err(invalid(AmountReason::RaiseAddsNothing));
            }
            // a short all-in is entered as a call, which clamps to the stack
            if total <= current_bet {
                return Err(invalid(AmountReason::RaiseNotAboveBet));
            }
            Ok(ValidatedAction::Raise(increment))
        }
    }
}

fn positive_size(size: Option<Chips>) -> Result<Chips, AmountReason> {
    match size {
        None => Err(AmountReason::MissingSize),
        Some(s) if s.is_zero() => Err(AmountReason::NonPositive),
        Some(s) => Ok(s),
    }
}

/// Applies a validated action to the seat and the street.
///
/// Returns the chips moved into the pot. Bets and raises always lift the
/// current bet, so they also take over the aggressor and raise count.
pub fn apply_action(player: &mut Player, street: &mut Street, action: ValidatedAction) -> Chips {
    let moved = match action {
        ValidatedAction::Fold => {
            player.folded = true;
            Chips::ZERO
        }
        ValidatedAction::Check => Chips::ZERO,
        ValidatedAction::Call(a) => player.commit(a),
        ValidatedAction::Bet(a) | ValidatedAction::Raise(a) => {
            let moved = player.commit(a);
            street.current_bet = player.contributed;
            street.last_aggressor = Some(player.position);
            street.raise_count += 1;
            moved
        }
    };
    street.pot += moved;
    player.acted_this_street = true;
    moved
}
