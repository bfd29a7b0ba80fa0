//! Turn outcome types.

use crate::action::Move;

/// Result of a turn from the submitting player's perspective.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Score adjustment applied to [`crate::GameState::score`].
    pub const fn score_delta(self) -> i64 {
        match self {
            Outcome::Win => 1,
            Outcome::Lose => -1,
            Outcome::Tie => 0,
        }
    }
}

/// Adjudication of a single submission.
///
/// Both moves are `None` when the submission was rejected. A result is built
/// once per turn and is never persisted; only its effect on the game state
/// is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    pub player_move: Option<Move>,
    pub opponent_move: Option<Move>,
    pub outcome: Outcome,
    pub reason: String,
}

impl TurnResult {
    /// Result handed back for an illegal move candidate.
    pub fn rejected() -> Self {
        Self {
            player_move: None,
            opponent_move: None,
            outcome: Outcome::Tie,
            reason: super::REJECTED_MESSAGE.to_string(),
        }
    }

    /// Whether the submission was refused before any move was played.
    pub fn is_rejected(&self) -> bool {
        self.player_move.is_none() && self.opponent_move.is_none()
    }
}
