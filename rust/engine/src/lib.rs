//! # sixmax-engine: Six-Max Betting Round Core
//!
//! A single-hand, six-seat no-limit hold'em betting state machine. It tracks
//! stacks, pot, turn order and street progression, and enforces which of
//! fold/check/call/bet/raise is legal under the current betting contract.
//!
//! The engine never evaluates cards, never logs and never touches the disk:
//! board and showdown cards are opaque strings supplied by the caller, and
//! the ordered action list is the only thing it produces.
//!
//! ## Core Modules
//!
//! - [`chips`] - Integer chip amounts in hundredths of a big blind
//! - [`seat`] - The six canonical seats and clockwise ring traversal
//! - [`player`] - Per-seat ledger, action types and action records
//! - [`street`] - Street ordering and per-street betting context
//! - [`rules`] - Action validation and chip movement
//! - [`completion`] - Whether betting on a street is closed
//! - [`state`] - Immutable hand state and the pure transition function
//! - [`engine`] - [`engine::Hand`], an owned hand with a method API
//! - [`result`] - Externally supplied hand results
//! - [`errors`] - Error types for rejected commands
//!
//! ## Quick Start
//!
//! ```rust
//! use sixmax_engine::chips::Chips;
//! use sixmax_engine::engine::Hand;
//! use sixmax_engine::player::ActionType;
//! use sixmax_engine::seat::Seat;
//! use sixmax_engine::street::Phase;
//!
//! let mut hand = Hand::new(Some(Seat::Btn), Chips::DEFAULT_STACK);
//! hand.add_preflop_action(Seat::Btn, ActionType::Raise, Some(Chips::from_bb(3))).unwrap();
//! hand.add_preflop_action(Seat::Sb, ActionType::Fold, None).unwrap();
//! hand.add_preflop_action(Seat::Bb, ActionType::Call, None).unwrap();
//!
//! let state = hand.snapshot();
//! assert!(state.waiting_for_board);
//! assert_eq!(state.phase, Phase::Flop);
//!
//! hand.confirm_board();
//! assert_eq!(hand.snapshot().current_actor, Some(Seat::Bb));
//! ```
//!
//! ## Pure Transitions
//!
//! The same hand can be driven without a mutable owner:
//!
//! ```rust
//! use sixmax_engine::player::ActionType;
//! use sixmax_engine::seat::Seat;
//! use sixmax_engine::state::{Command, HandConfig, HandState};
//!
//! let start = HandState::new(HandConfig::default());
//! let t = start
//!     .apply(Command::Preflop {
//!         seat: Seat::Utg,
//!         action: ActionType::Call,
//!         size: None,
//!         at: Default::default(),
//!     })
//!     .unwrap();
//! assert_eq!(t.emitted.len(), 1);
//! assert!(start.actions().is_empty());
//! ```

pub mod chips;
pub mod completion;
pub mod engine;
pub mod errors;
pub mod player;
pub mod result;
pub mod rules;
pub mod seat;
pub mod state;
pub mod street;
