//! Repository contract for saving and loading the game document.

use game_core::GameState;

use super::Result;

/// Backing store for the single persisted [`GameState`].
///
/// There is one document per installation; `save` overwrites it and `load`
/// returns it whole. Neither merges.
pub trait StateRepository {
    /// Load the stored state, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<GameState>>;

    /// Overwrite the stored state.
    fn save(&self, state: &GameState) -> Result<()>;
}

impl<R: StateRepository + ?Sized> StateRepository for &R {
    fn load(&self) -> Result<Option<GameState>> {
        (**self).load()
    }

    fn save(&self, state: &GameState) -> Result<()> {
        (**self).save(state)
    }
}
