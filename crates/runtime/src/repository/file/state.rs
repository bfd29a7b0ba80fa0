//! File-based StateRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use game_core::GameState;

use crate::repository::{Result, StateRepository};

/// Name of the state document inside the state directory.
pub const STATE_FILE_NAME: &str = "automata-game_state.json";

/// File-based implementation of StateRepository.
///
/// # File Format
///
/// The state is stored as a single JSON object in
/// `{base_dir}/automata-game_state.json`:
///
/// ```text
/// {"username":"ada","score":1,"turn_history":["rock","spock"]}
/// ```
///
/// The file is rewritten in place on every save. An interrupted write can
/// leave a truncated document behind; loading one reports a JSON error, which
/// the state store turns into a fresh state.
#[derive(Clone, Debug)]
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a repository storing its document under `base_dir`.
    ///
    /// The directory is created on first save.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Repository in the platform temporary directory.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir())
    }

    /// Get the path to the state document.
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(STATE_FILE_NAME)
    }
}

impl StateRepository for FileStateRepository {
    fn load(&self) -> Result<Option<GameState>> {
        let path = self.path();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let state: GameState = serde_json::from_str(&content)?;

        tracing::debug!("Loaded state from {}", path.display());

        Ok(Some(state))
    }

    fn save(&self, state: &GameState) -> Result<()> {
        let path = self.path();

        let json = serde_json::to_string(state)?;

        fs::create_dir_all(&self.base_dir)?;
        fs::write(&path, json)?;

        tracing::debug!("Saved state to {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;
    use game_core::Move;
    use tempfile::TempDir;

    #[test]
    fn test_path_uses_fixed_file_name() {
        let repo = FileStateRepository::new("/some/dir");
        assert_eq!(
            repo.path(),
            PathBuf::from("/some/dir").join("automata-game_state.json")
        );

        let temp = FileStateRepository::in_temp_dir();
        assert!(temp.path().starts_with(std::env::temp_dir()));
    }

    #[test]
    fn test_missing_file_loads_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStateRepository::new(temp_dir.path());

        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStateRepository::new(temp_dir.path());
        let state = GameState {
            username: Some("player1".to_string()),
            score: 10,
            turn_history: vec![Move::Rock, Move::Paper, Move::Scissors],
        };

        repo.save(&state).unwrap();

        let on_disk = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            on_disk,
            r#"{"username":"player1","score":10,"turn_history":["rock","paper","scissors"]}"#
        );
        assert_eq!(repo.load().unwrap(), Some(state));
    }

    #[test]
    fn test_load_valid_document() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStateRepository::new(temp_dir.path());
        fs::write(
            repo.path(),
            r#"{"score": 5, "turn_history": ["rock", "paper"], "username": "testuser"}"#,
        )
        .unwrap();

        let state = repo.load().unwrap().unwrap();
        assert_eq!(state.score, 5);
        assert_eq!(state.turn_history, vec![Move::Rock, Move::Paper]);
        assert_eq!(state.username.as_deref(), Some("testuser"));
    }

    #[test]
    fn test_malformed_document_is_a_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStateRepository::new(temp_dir.path());
        fs::write(repo.path(), "invalid json").unwrap();

        assert!(matches!(repo.load(), Err(RepositoryError::Json(_))));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileStateRepository::new(temp_dir.path().join("nested").join("dir"));

        repo.save(&GameState::default()).unwrap();

        assert_eq!(repo.load().unwrap(), Some(GameState::default()));
    }
}
