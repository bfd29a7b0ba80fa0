//! Turn rules and state for rock-paper-scissors-lizard-spock.
//!
//! `game-core` defines the canonical rules (moves, the beats table, turn
//! adjudication) and the persisted [`GameState`], and exposes pure APIs the
//! runtime builds on. All score and history mutation flows through
//! [`engine::GameEngine`]; the opponent's move arrives through an injected
//! [`env::OpponentOracle`].
pub mod action;
pub mod engine;
pub mod env;
pub mod rules;
pub mod state;

pub use action::{InvalidMove, Move};
pub use engine::GameEngine;
pub use env::{OpponentOracle, ScriptedOpponent};
pub use rules::{Outcome, TurnResult, beats, determine_outcome, justification, reason};
pub use state::GameState;
