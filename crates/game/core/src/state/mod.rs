//! Persisted game state.
//!
//! [`GameState`] is the whole document the state store reads and writes. The
//! engine mutates it in place; everything else replaces it wholesale.

use crate::action::Move;

/// Name shown when no username has been chosen yet.
pub const DEFAULT_DISPLAY_NAME: &str = "Player";

/// Cumulative record of one player's games.
///
/// `score` always equals wins minus losses over the moves in
/// `turn_history`, which only ever holds accepted submissions in play order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameState {
    pub username: Option<String>,
    pub score: i64,
    pub turn_history: Vec<Move>,
}

impl GameState {
    /// Fresh state for `username` with no games played.
    pub fn new(username: Option<String>) -> Self {
        Self {
            username,
            ..Self::default()
        }
    }

    /// Number of accepted turns since the last reset.
    pub fn rounds_played(&self) -> usize {
        self.turn_history.len()
    }

    /// True once a non-empty username is set.
    pub fn has_username(&self) -> bool {
        !self.username.as_deref().is_none_or(str::is_empty)
    }

    /// The username, or [`DEFAULT_DISPLAY_NAME`] if none is set.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// The same player starting over.
    pub fn reset(&self) -> Self {
        Self::new(self.username.clone())
    }

    /// Records an accepted turn. Only the engine calls this.
    ///
    /// The score saturates at the `i64` bounds.
    pub(crate) fn record(&mut self, player: Move, score_delta: i64) {
        self.turn_history.push(player);
        self.score = self.score.saturating_add(score_delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty() {
        let state = GameState::default();
        assert_eq!(state.username, None);
        assert_eq!(state.score, 0);
        assert!(state.turn_history.is_empty());
        assert_eq!(state.display_name(), "Player");
        assert!(!state.has_username());
    }

    #[test]
    fn empty_username_counts_as_unset() {
        let state = GameState::new(Some(String::new()));
        assert!(!state.has_username());
        assert_eq!(state.display_name(), "Player");

        assert!(GameState::new(Some("ada".into())).has_username());
    }

    #[test]
    fn reset_keeps_only_the_username() {
        let state = GameState {
            username: Some("ada".to_string()),
            score: -3,
            turn_history: vec![Move::Rock, Move::Paper, Move::Paper],
        };

        let fresh = state.reset();
        assert_eq!(fresh, GameState::new(Some("ada".to_string())));
        assert_eq!(fresh.rounds_played(), 0);
        assert_eq!(fresh.display_name(), "ada");
    }

    #[test]
    fn score_saturates_at_the_bounds() {
        let mut top = GameState {
            score: i64::MAX,
            ..GameState::default()
        };
        top.record(Move::Rock, 1);
        assert_eq!(top.score, i64::MAX);
        assert_eq!(top.turn_history, vec![Move::Rock]);

        let mut bottom = GameState {
            score: i64::MIN,
            ..GameState::default()
        };
        bottom.record(Move::Paper, -1);
        assert_eq!(bottom.score, i64::MIN);
        assert_eq!(bottom.turn_history, vec![Move::Paper]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn document_uses_move_names_and_field_order() {
        let state = GameState {
            username: Some("testuser".to_string()),
            score: 5,
            turn_history: vec![Move::Rock, Move::Paper],
        };

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"username":"testuser","score":5,"turn_history":["rock","paper"]}"#
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_take_defaults() {
        let state: GameState = serde_json::from_str(r#"{"score": 2}"#).unwrap();
        assert_eq!(state.username, None);
        assert_eq!(state.score, 2);
        assert!(state.turn_history.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_moves_are_rejected() {
        let parsed = serde_json::from_str::<GameState>(r#"{"turn_history": ["banana"]}"#);
        assert!(parsed.is_err());
    }
}
