//! One full turn: adjudicate, record, persist.

use game_core::{GameEngine, GameState, OpponentOracle, TurnResult};

use crate::repository::StateRepository;
use crate::store::StateStore;

/// Plays `raw` against `opponent` and persists the outcome.
///
/// A rejected submission returns `state` untouched and writes nothing. An
/// accepted one appends the player's move, adjusts the score and saves the
/// whole state before returning; a failed save leaves both the state and the
/// result as they are.
pub fn submit_turn<O, R>(
    raw: &str,
    mut state: GameState,
    opponent: &mut O,
    store: &StateStore<R>,
) -> (TurnResult, GameState)
where
    O: OpponentOracle + ?Sized,
    R: StateRepository,
{
    let result = GameEngine::new(&mut state).submit(raw, opponent);

    if result.is_rejected() {
        tracing::debug!(input = raw, "Rejected move submission");
        return (result, state);
    }

    store.save(&state);

    tracing::info!(
        player = ?result.player_move,
        opponent = ?result.opponent_move,
        outcome = %result.outcome,
        score = state.score,
        "Turn resolved"
    );

    (result, state)
}
