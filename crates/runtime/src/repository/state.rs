use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use game_core::GameState;

use super::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository
#[derive(Debug, Default)]
pub struct InMemoryStateRepo {
    state: RwLock<Option<GameState>>,
    saves: AtomicUsize,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `state`.
    pub fn with_state(state: GameState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

impl StateRepository for InMemoryStateRepo {
    fn load(&self) -> Result<Option<GameState>> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(state.clone())
    }

    fn save(&self, state: &GameState) -> Result<()> {
        let mut current = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(state.clone());
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
