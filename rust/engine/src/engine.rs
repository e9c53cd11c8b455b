use chrono::Utc;

use crate::chips::Chips;
use crate::errors::HandError;
use crate::player::{ActionRecord, ActionType};
use crate::result::{CompletionType, HandResult};
use crate::seat::Seat;
use crate::state::{Command, HandConfig, HandSnapshot, HandState, PotDetails};

/// One hand of six-max no-limit hold'em, owned by whoever is driving it.
///
/// Every method is a thin wrapper over [`HandState::apply`]: the accepted
/// command replaces the state and is appended to the command log, a rejected
/// one changes nothing. Seat actions are stamped with the wall clock here,
/// never inside the transition.
///
/// # Examples
///
/// ```
/// use sixmax_engine::chips::Chips;
/// use sixmax_engine::engine::Hand;
/// use sixmax_engine::player::ActionType;
/// use sixmax_engine::seat::Seat;
///
/// let mut hand = Hand::new(Some(Seat::Btn), Chips::DEFAULT_STACK);
///
/// // BTN opens to 3bb; UTG, HJ and CO are folded on the way
/// let emitted = hand
///     .add_preflop_action(Seat::Btn, ActionType::Raise, Some(Chips::from_bb(3)))
///     .unwrap();
/// assert_eq!(emitted.len(), 4);
///
/// let state = hand.snapshot();
/// assert_eq!(state.current_actor, Some(Seat::Sb));
/// assert_eq!(state.pot, Chips(450));
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    state: HandState,
    commands: Vec<Command>,
}

impl Hand {
    pub fn new(hero: Option<Seat>, starting_stack: Chips) -> Self {
        Self::with_config(HandConfig {
            hero,
            starting_stack,
        })
    }

    pub fn with_config(config: HandConfig) -> Self {
        Self {
            state: HandState::new(config),
            commands: Vec::new(),
        }
    }

    /// Rebuilds a hand from its command log
    pub fn replay(config: HandConfig, commands: Vec<Command>) -> Result<Self, HandError> {
        let state = HandState::replay(config, commands.iter().cloned())?;
        Ok(Self { state, commands })
    }

    /// Applies any command and returns the action records it committed
    pub fn execute(&mut self, command: Command) -> Result<Vec<ActionRecord>, HandError> {
        let transition = self.state.apply(command.clone())?;
        self.state = transition.state;
        self.commands.push(command);
        Ok(transition.emitted)
    }

    /// Records a preflop action, skip-folding every seat between the
    /// current actor and `seat`.
    pub fn add_preflop_action(
        &mut self,
        seat: Seat,
        action: ActionType,
        size: Option<Chips>,
    ) -> Result<Vec<ActionRecord>, HandError> {
        self.execute(Command::Preflop {
            seat,
            action,
            size,
            at: Utc::now(),
        })
    }

    /// Records a postflop action; `seat` must be the current actor
    pub fn add_postflop_action(
        &mut self,
        seat: Seat,
        action: ActionType,
        size: Option<Chips>,
    ) -> Result<Vec<ActionRecord>, HandError> {
        self.execute(Command::Postflop {
            seat,
            action,
            size,
            at: Utc::now(),
        })
    }

    /// Routes to the preflop or postflop entry point for the current phase
    pub fn add_action(
        &mut self,
        seat: Seat,
        action: ActionType,
        size: Option<Chips>,
    ) -> Result<Vec<ActionRecord>, HandError> {
        if self.state.phase() == crate::street::Phase::Preflop {
            self.add_preflop_action(seat, action, size)
        } else {
            self.add_postflop_action(seat, action, size)
        }
    }

    /// Signals that the pending street's board is out. No-op unless the hand
    /// is waiting for one.
    pub fn confirm_board(&mut self) {
        self.confirm_board_with(Vec::new());
    }

    /// Like [`Hand::confirm_board`], keeping the dealt card strings
    pub fn confirm_board_with(&mut self, cards: Vec<String>) {
        if !self.state.waiting_for_board() {
            return;
        }
        // board confirmation cannot be rejected
        let _ = self.execute(Command::ConfirmBoard { cards });
    }

    pub fn set_hand_result(&mut self, result: HandResult) -> Result<(), HandError> {
        self.execute(Command::SetResult { result }).map(|_| ())
    }

    pub fn hand_result(&self) -> Option<&HandResult> {
        self.state.hand_result()
    }

    pub fn snapshot(&self) -> HandSnapshot {
        self.state.snapshot()
    }

    pub fn available_actions(&self, seat: Seat) -> Vec<ActionType> {
        self.state.available_actions(seat)
    }

    pub fn pot_details(&self) -> PotDetails {
        self.state.pot_details()
    }

    pub fn raise_label(&self) -> String {
        self.state.raise_label()
    }

    pub fn raise_count(&self) -> u32 {
        self.state.raise_count()
    }

    pub fn is_ready_for_result(&self) -> bool {
        self.state.is_ready_for_result()
    }

    pub fn completion_type(&self) -> CompletionType {
        self.state.completion_type()
    }

    pub fn state(&self) -> &HandState {
        &self.state
    }

    /// Accepted commands in the order they were applied
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::with_config(HandConfig::default())
    }
}
