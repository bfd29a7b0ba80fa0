//! File-based repository implementations.

mod state;

pub use state::{FileStateRepository, STATE_FILE_NAME};
