//! Repository layer for the persisted game document.
//!
//! A repository stores exactly one [`game_core::GameState`] and reads or
//! writes it wholesale. Repositories report failures; turning those failures
//! into defaults and log lines is [`crate::store::StateStore`]'s job.

mod error;
mod file;
mod state;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileStateRepository, STATE_FILE_NAME};
pub use state::InMemoryStateRepo;
pub use traits::StateRepository;
