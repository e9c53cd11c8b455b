//! Immutable hand state and the pure transition function driving it.
//!
//! [`HandState::apply`] never touches `self`: it works on a copy and hands
//! the new state back, so a rejected command cannot leave a half-applied
//! hand behind and any hand can be rebuilt from its command log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chips::Chips;
use crate::completion::is_street_complete;
use crate::errors::{HandError, IllegalReason, StateReason};
use crate::player::{ActionRecord, ActionType, Player};
use crate::result::{CompletionType, HandResult};
use crate::rules::{apply_action, validate_action, ValidatedAction};
use crate::seat::{Seat, SEAT_COUNT};
use crate::street::{Phase, Street};

/// Parameters fixed when a hand is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfig {
    pub hero: Option<Seat>,
    pub starting_stack: Chips,
}

impl HandConfig {
    /// Largest starting stack six seats can put in one pot without the
    /// chip count overflowing
    pub const MAX_STACK: Chips = Chips(u64::MAX / SEAT_COUNT as u64);

    /// # Errors
    ///
    /// [`StateReason::StackTooLarge`] when `starting_stack` is above
    /// [`HandConfig::MAX_STACK`].
    pub fn validate(&self) -> Result<(), HandError> {
        if self.starting_stack > Self::MAX_STACK {
            return Err(HandError::State(StateReason::StackTooLarge {
                max: Self::MAX_STACK,
            }));
        }
        Ok(())
    }
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            hero: None,
            starting_stack: Chips::DEFAULT_STACK,
        }
    }
}

/// Where the hand is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// A seat is due to act on the current street
    Betting,
    /// The street has been opened but its board is not confirmed yet
    AwaitingBoard,
    /// No more betting; only the result may still be recorded
    Terminal,
}

/// Everything a caller can ask the engine to do.
///
/// Seat actions carry the time they were taken as `at`; every record they
/// commit is stamped with it, so replaying a log reproduces the hand
/// exactly. A missing `at` reads as the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    Preflop {
        seat: Seat,
        action: ActionType,
        #[serde(default)]
        size: Option<Chips>,
        #[serde(default)]
        at: DateTime<Utc>,
    },
    Postflop {
        seat: Seat,
        action: ActionType,
        #[serde(default)]
        size: Option<Chips>,
        #[serde(default)]
        at: DateTime<Utc>,
    },
    ConfirmBoard {
        #[serde(default)]
        cards: Vec<String>,
    },
    SetResult {
        result: HandResult,
    },
}

/// Outcome of an accepted command
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: HandState,
    /// Action records committed by the command, in order
    pub emitted: Vec<ActionRecord>,
}

/// Pot split between earlier streets and the street in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotDetails {
    pub starting_pot: Chips,
    pub added_this_street: Chips,
    pub total_pot: Chips,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub players: [Player; SEAT_COUNT],
    pub pot: Chips,
    pub phase: Phase,
    pub stage: Stage,
    pub current_actor: Option<Seat>,
    pub actions: Vec<ActionRecord>,
    pub is_complete: bool,
    pub current_bet: Chips,
    pub waiting_for_board: bool,
    pub board: Vec<String>,
    pub hero: Option<Seat>,
}

/// Complete state of one six-max hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    config: HandConfig,
    players: [Player; SEAT_COUNT],
    street: Street,
    history: Vec<ActionRecord>,
    stage: Stage,
    current_actor: Option<Seat>,
    board: Vec<String>,
    result: Option<HandResult>,
}

impl HandState {
    /// Seats six players with `config.starting_stack` and posts the blinds.
    /// A seat that cannot cover its blind posts what it has.
    ///
    /// Stacks above [`HandConfig::MAX_STACK`] are cut down to it; use
    /// [`HandState::try_new`] to reject them instead.
    pub fn new(mut config: HandConfig) -> Self {
        config.starting_stack = config.starting_stack.min(HandConfig::MAX_STACK);
        let players =
            Seat::ALL.map(|seat| Player::new(seat, config.starting_stack, config.hero == Some(seat)));
        let mut state = Self {
            config,
            players,
            street: Street::preflop(),
            history: Vec::new(),
            stage: Stage::Betting,
            current_actor: None,
            board: Vec::new(),
            result: None,
        };
        let sb = state.players[Seat::Sb.index()].commit(Chips::SMALL_BLIND);
        let bb = state.players[Seat::Bb.index()].commit(Chips::BIG_BLIND);
        state.street.pot = sb + bb;
        state.street.current_bet = sb.max(bb);
        state.advance_turn(Seat::Bb);
        state
    }

    /// Like [`HandState::new`], but refuses a stack above
    /// [`HandConfig::MAX_STACK`].
    pub fn try_new(config: HandConfig) -> Result<Self, HandError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Rebuilds a hand by applying `commands` in order to a fresh one
    pub fn replay<I>(config: HandConfig, commands: I) -> Result<HandState, HandError>
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .try_fold(HandState::try_new(config)?, |state, cmd| {
                state.apply(cmd).map(|t| t.state)
            })
    }

    /// Applies one command to a copy of this state.
    ///
    /// # Errors
    ///
    /// Any [`HandError`]; `self` is never modified either way.
    pub fn apply(&self, command: Command) -> Result<Transition, HandError> {
        let mut next = self.clone();
        let committed = next.history.len();
        match command {
            Command::Preflop {
                seat,
                action,
                size,
                at,
            } => next.preflop_action(seat, action, size, at)?,
            Command::Postflop {
                seat,
                action,
                size,
                at,
            } => next.postflop_action(seat, action, size, at)?,
            Command::ConfirmBoard { cards } => next.confirm_board(cards),
            Command::SetResult { result } => next.set_result(result)?,
        }
        let emitted = next.history[committed..].to_vec();
        Ok(Transition {
            state: next,
            emitted,
        })
    }

    fn preflop_action(
        &mut self,
        seat: Seat,
        action: ActionType,
        size: Option<Chips>,
        at: DateTime<Utc>,
    ) -> Result<(), HandError> {
        if self.street.phase != Phase::Preflop {
            return Err(HandError::PhaseMismatch {
                operation: "preflop action",
                phase: self.street.phase,
            });
        }
        let current = self.pending_actor(seat)?;
        let validated = validate_action(self.player(seat), self.street.current_bet, action, size, false)?;

        if seat != current {
            let skipped: Vec<Seat> = std::iter::once(current)
                .chain(current.between(seat))
                .filter(|s| self.player(*s).can_act())
                .collect();
            for s in skipped {
                self.commit(s, ValidatedAction::Fold, true, at);
            }
        }
        self.commit(seat, validated, false, at);
        self.advance_turn(seat);
        Ok(())
    }

    fn postflop_action(
        &mut self,
        seat: Seat,
        action: ActionType,
        size: Option<Chips>,
        at: DateTime<Utc>,
    ) -> Result<(), HandError> {
        if self.street.phase == Phase::Preflop {
            return Err(HandError::PhaseMismatch {
                operation: "postflop action",
                phase: self.street.phase,
            });
        }
        let current = self.pending_actor(seat)?;
        if seat != current {
            return Err(HandError::IllegalAction {
                seat,
                reason: IllegalReason::OutOfTurn { expected: current },
            });
        }
        let validated = validate_action(self.player(seat), self.street.current_bet, action, size, false)?;
        self.commit(seat, validated, false, at);
        self.advance_turn(seat);
        Ok(())
    }

    fn pending_actor(&self, seat: Seat) -> Result<Seat, HandError> {
        match (self.stage, self.current_actor) {
            (Stage::Betting, Some(current)) => Ok(current),
            _ => Err(HandError::IllegalAction {
                seat,
                reason: IllegalReason::NoActionPending,
            }),
        }
    }

    fn commit(&mut self, seat: Seat, action: ValidatedAction, auto: bool, at: DateTime<Utc>) {
        let player = &mut self.players[seat.index()];
        let moved = apply_action(player, &mut self.street, action);
        let record = ActionRecord {
            id: self.history.len() as u32 + 1,
            position: seat,
            action: action.action_type(),
            bet_size: moved,
            pot_size: self.street.pot,
            phase: self.street.phase,
            auto,
            timestamp: at,
        };
        self.street.actions.push(record.clone());
        self.history.push(record);
    }

    /// Hands the turn to the next eligible seat after `from`, or closes the street
    fn advance_turn(&mut self, from: Seat) {
        let next = self.next_active_seat(from);
        match next {
            Some(seat) if !is_street_complete(&self.players, &self.street, next) => {
                self.current_actor = Some(seat);
            }
            _ => self.close_street(),
        }
    }

    fn close_street(&mut self) {
        self.current_actor = None;
        if self.active_count() <= 1 {
            self.stage = Stage::Terminal;
            return;
        }
        match self.street.phase.next() {
            Some(phase) => {
                self.open_street(phase);
                self.stage = Stage::AwaitingBoard;
            }
            None => self.stage = Stage::Terminal,
        }
    }

    fn open_street(&mut self, phase: Phase) {
        for p in self.players.iter_mut() {
            p.reset_street();
        }
        self.street.advance_to(phase);
    }

    /// Clears the board gate. Streets nobody can bet on are staged straight
    /// through, one confirmation each, until a seat can act or the river is
    /// dealt.
    fn confirm_board(&mut self, cards: Vec<String>) {
        if self.stage != Stage::AwaitingBoard {
            return;
        }
        self.board.extend(cards);
        match self.first_actor() {
            Some(seat) => {
                self.stage = Stage::Betting;
                self.current_actor = Some(seat);
            }
            None => match self.street.phase.next() {
                Some(phase) => self.open_street(phase),
                None => self.stage = Stage::Terminal,
            },
        }
    }

    fn set_result(&mut self, result: HandResult) -> Result<(), HandError> {
        if self.stage != Stage::Terminal {
            return Err(HandError::State(StateReason::HandNotComplete));
        }
        if self.result.is_some() {
            return Err(HandError::State(StateReason::ResultAlreadyRecorded));
        }
        self.result = Some(result);
        Ok(())
    }

    /// First seat clockwise of `from` that is still in and has chips.
    /// Checks at most one full revolution, ending on `from` itself.
    pub fn next_active_seat(&self, from: Seat) -> Option<Seat> {
        from.revolution().find(|s| self.player(*s).can_act())
    }

    /// Postflop streets open with the small blind, or the next seat able to act
    fn first_actor(&self) -> Option<Seat> {
        if self.player(Seat::Sb).can_act() {
            Some(Seat::Sb)
        } else {
            self.next_active_seat(Seat::Sb)
        }
    }

    /// Seats that have not folded
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Legal actions for `seat` right now.
    ///
    /// Preflop any seat still able to act may be named (earlier seats are
    /// skip-folded), so its options are computed from its own contribution.
    /// Postflop only the current actor has options.
    pub fn available_actions(&self, seat: Seat) -> Vec<ActionType> {
        let player = self.player(seat);
        if self.stage != Stage::Betting || !player.can_act() {
            return Vec::new();
        }
        if self.street.phase != Phase::Preflop && self.current_actor != Some(seat) {
            return Vec::new();
        }
        let current_bet = self.street.current_bet;
        let to_call = player.to_call(current_bet);
        let mut actions = Vec::with_capacity(3);
        if to_call.is_zero() {
            actions.push(ActionType::Check);
        } else {
            actions.push(ActionType::Fold);
            actions.push(ActionType::Call);
        }
        if current_bet.is_zero() {
            actions.push(ActionType::Bet);
        } else if player.stack > to_call {
            actions.push(ActionType::Raise);
        }
        actions
    }

    pub fn pot_details(&self) -> PotDetails {
        PotDetails {
            starting_pot: self.street.starting_pot,
            added_this_street: self.street.added(),
            total_pot: self.street.pot,
        }
    }

    pub fn raise_label(&self) -> String {
        self.street.raise_label()
    }

    pub fn raise_count(&self) -> u32 {
        self.street.raise_count
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Terminal
    }

    pub fn waiting_for_board(&self) -> bool {
        self.stage == Stage::AwaitingBoard
    }

    pub fn is_ready_for_result(&self) -> bool {
        self.is_complete() && self.result.is_none()
    }

    pub fn completion_type(&self) -> CompletionType {
        let active = self.active_count();
        if active == 1 {
            CompletionType::Fold
        } else if active > 1 && !self.players.iter().any(|p| p.can_act()) {
            CompletionType::Allin
        } else {
            CompletionType::Showdown
        }
    }

    pub fn snapshot(&self) -> HandSnapshot {
        HandSnapshot {
            players: self.players.clone(),
            pot: self.street.pot,
            phase: self.street.phase,
            stage: self.stage,
            current_actor: self.current_actor,
            actions: self.history.clone(),
            is_complete: self.is_complete(),
            current_bet: self.street.current_bet,
            waiting_for_board: self.waiting_for_board(),
            board: self.board.clone(),
            hero: self.config.hero,
        }
    }

    pub fn config(&self) -> &HandConfig {
        &self.config
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; SEAT_COUNT] {
        &self.players
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn phase(&self) -> Phase {
        self.street.phase
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn pot(&self) -> Chips {
        self.street.pot
    }

    pub fn current_bet(&self) -> Chips {
        self.street.current_bet
    }

    pub fn current_actor(&self) -> Option<Seat> {
        self.current_actor
    }

    /// Every action of the hand in commit order
    pub fn actions(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn board(&self) -> &[String] {
        &self.board
    }

    pub fn hand_result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }
}
