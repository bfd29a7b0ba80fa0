//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::repository::{FileStateRepository, STATE_FILE_NAME};

/// Where state lives and how the opponent is seeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding the state document.
    pub state_dir: PathBuf,
    /// Fixed opponent seed; `None` draws from OS entropy.
    pub opponent_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            state_dir: env::temp_dir(),
            opponent_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AUTOMATA_STATE_DIR` - Directory for the state document (default: OS temp dir)
    /// - `AUTOMATA_OPPONENT_SEED` - Seed for a reproducible opponent (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`], reading variables through `lookup`.
    ///
    /// An empty state dir keeps the default; an unparsable seed is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("AUTOMATA_STATE_DIR").filter(|dir| !dir.is_empty()) {
            config.state_dir = PathBuf::from(dir);
        }

        config.opponent_seed = read_var(&lookup, "AUTOMATA_OPPONENT_SEED");

        config
    }

    pub fn with_state_dir(mut self, state_dir: impl Into<PathBuf>) -> Self {
        self.state_dir = state_dir.into();
        self
    }

    pub fn with_opponent_seed(mut self, seed: u64) -> Self {
        self.opponent_seed = Some(seed);
        self
    }

    /// Full path of the state document.
    pub fn state_path(&self) -> PathBuf {
        self.state_dir.join(STATE_FILE_NAME)
    }

    /// File repository rooted at [`RuntimeConfig::state_dir`].
    pub fn repository(&self) -> FileStateRepository {
        FileStateRepository::new(&self.state_dir)
    }
}

fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
