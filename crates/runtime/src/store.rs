//! Best-effort persistence facade.
//!
//! [`StateStore`] wraps a [`StateRepository`] and never reports failure:
//! a document that cannot be read becomes a fresh [`GameState`], and a save
//! that cannot be written is logged and dropped. Durability is best-effort;
//! gameplay never stops because the disk misbehaved.

use game_core::GameState;

use crate::repository::StateRepository;

/// Defaulting, error-swallowing access to the persisted game state.
#[derive(Debug)]
pub struct StateStore<R> {
    repo: R,
}

impl<R: StateRepository> StateStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load the persisted state, or a default one if it is missing or
    /// unreadable.
    pub fn load(&self) -> GameState {
        match self.repo.load() {
            Ok(Some(state)) => {
                tracing::debug!(
                    score = state.score,
                    rounds = state.rounds_played(),
                    "Loaded game state"
                );
                state
            }
            Ok(None) => {
                tracing::debug!("No saved game state, starting fresh");
                GameState::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load game state, starting fresh: {}", e);
                GameState::default()
            }
        }
    }

    /// Overwrite the persisted state. Failures are logged, never returned.
    pub fn save(&self, state: &GameState) {
        if let Err(e) = self.repo.save(state) {
            tracing::error!(score = state.score, "Failed to save game state: {}", e);
        }
    }

    /// The underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }
}
