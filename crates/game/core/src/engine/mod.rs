//! Turn resolution.
//!
//! The [`GameEngine`] is the only writer of a [`GameState`]'s score and
//! history. A turn is validated, adjudicated and recorded in one call, so a
//! caller never observes the history appended without the score adjusted.
//! Persistence is the runtime's concern, not the engine's.

use crate::action::Move;
use crate::env::OpponentOracle;
use crate::rules::{self, TurnResult};
use crate::state::GameState;

/// Applies turns to a borrowed game state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Validates a raw move candidate and plays it.
    ///
    /// An illegal candidate yields [`TurnResult::rejected`] and touches
    /// neither the state nor the oracle.
    pub fn submit<O>(&mut self, raw: &str, opponent: &mut O) -> TurnResult
    where
        O: OpponentOracle + ?Sized,
    {
        match Move::parse(raw) {
            Ok(player) => self.play(player, opponent),
            Err(_) => TurnResult::rejected(),
        }
    }

    /// Plays an already-validated move.
    ///
    /// Draws the opponent's move, adjudicates, then appends `player` to the
    /// history and adjusts the score.
    pub fn play<O>(&mut self, player: Move, opponent: &mut O) -> TurnResult
    where
        O: OpponentOracle + ?Sized,
    {
        let opponent_move = opponent.next_move();
        let result = rules::determine_outcome(player, opponent_move);
        self.state.record(player, result.outcome.score_delta());
        result
    }

    /// Read access to the state being driven.
    pub fn state(&self) -> &GameState {
        self.state
    }
}
