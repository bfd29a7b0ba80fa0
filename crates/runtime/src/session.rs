//! A player's session: the live state plus the collaborators that feed and
//! persist it.
//!
//! Presentation layers drive a [`Session`] and render what it returns. Every
//! method that changes the state saves it before returning.

use game_core::{GameState, OpponentOracle, TurnResult};

use crate::config::RuntimeConfig;
use crate::oracle::RandomOpponent;
use crate::repository::{FileStateRepository, StateRepository};
use crate::store::StateStore;
use crate::turn;

/// Session backed by the state file and a random opponent.
pub type FileSession = Session<FileStateRepository, RandomOpponent>;

pub struct Session<R, O> {
    state: GameState,
    store: StateStore<R>,
    opponent: O,
}

impl FileSession {
    /// Opens the session described by `config`, loading any saved state.
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let opponent = match config.opponent_seed {
            Some(seed) => RandomOpponent::seeded(seed),
            None => RandomOpponent::from_entropy(),
        };

        tracing::info!(path = %config.state_path().display(), "Opening session");

        Self::start(StateStore::new(config.repository()), opponent)
    }
}

impl<R, O> Session<R, O>
where
    R: StateRepository,
    O: OpponentOracle,
{
    /// Starts a session from whatever the store holds.
    pub fn start(store: StateStore<R>, opponent: O) -> Self {
        let state = store.load();
        Self {
            state,
            store,
            opponent,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True until a non-empty username has been chosen for this state.
    pub fn needs_username(&self) -> bool {
        !self.state.has_username()
    }

    /// Names the current player, keeping score and history.
    ///
    /// A blank name falls back to the default display name.
    pub fn set_username(&mut self, username: &str) {
        self.state.username = Some(normalize_username(username));
        self.store.save(&self.state);
    }

    /// Plays one turn; see [`turn::submit_turn`].
    pub fn submit_turn(&mut self, raw: &str) -> TurnResult {
        let state = std::mem::take(&mut self.state);
        let (result, state) = turn::submit_turn(raw, state, &mut self.opponent, &self.store);
        self.state = state;
        result
    }

    /// Starts over as the same player.
    pub fn restart(&mut self) {
        self.replace(self.state.reset());
        tracing::info!(player = self.state.display_name(), "Game restarted");
    }

    /// Starts over as a different player.
    pub fn log_out(&mut self, username: &str) {
        self.replace(GameState::new(Some(normalize_username(username))));
        tracing::info!(player = self.state.display_name(), "Logged in as new player");
    }

    pub fn store(&self) -> &StateStore<R> {
        &self.store
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    fn replace(&mut self, state: GameState) {
        self.state = state;
        self.store.save(&self.state);
    }
}

fn normalize_username(username: &str) -> String {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        game_core::state::DEFAULT_DISPLAY_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
