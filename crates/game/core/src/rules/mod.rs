//! Fixed outcome rules.
//!
//! Which move defeats which, and the line of flavour text that justifies each
//! win, live in a single static table indexed by `(winner, loser)`. A cell is
//! populated exactly when the row move beats the column move, so "does A beat
//! B" and "why does A beat B" can never disagree.
//!
//! Every function here is pure.

mod outcome;

pub use outcome::{Outcome, TurnResult};

use crate::action::Move;

/// Reason given for two identical moves.
pub const TIE_MESSAGE: &str = "Tie - we are both the same. How boring..";

/// Prefix of the reason when the player wins.
pub const WIN_PREFIX: &str = "You win. I'll allow it this time.. ";

/// Prefix of the reason when the opponent wins.
pub const LOSE_PREFIX: &str = "Ha! Victory is mine! ";

/// Reason given for an illegal move candidate.
pub const REJECTED_MESSAGE: &str = "No cheating this time! Be better.";

/// Sentinel returned by [`reason`] for a pair in which the first move does not
/// beat the second. Seeing it means a caller broke the lookup contract.
pub const UNREACHABLE_REASON: &str = "Wait. Something has gone terribly wrong.";

type Justification = Option<&'static str>;

/// `RULES[winner][loser]`, rows and columns in [`Move::ALL`] order.
const RULES: [[Justification; Move::COUNT]; Move::COUNT] = [
    // rock
    [
        None,
        None,
        Some("Rock crushes Scissors"),
        Some("Rock crushes Lizard"),
        None,
    ],
    // paper
    [
        Some("Paper covers Rock"),
        None,
        None,
        None,
        Some("Paper disproves Spock"),
    ],
    // scissors
    [
        None,
        Some("Scissors cuts Paper"),
        None,
        Some("Scissors decapitates Lizard"),
        None,
    ],
    // lizard
    [
        None,
        Some("Lizard eats Paper"),
        None,
        None,
        Some("Lizard poisons Spock"),
    ],
    // spock
    [
        Some("Spock vaporizes Rock"),
        None,
        Some("Spock smashes Scissors"),
        None,
        None,
    ],
];

/// Flavour text for `winner` defeating `loser`, if it does.
#[inline]
pub const fn justification(winner: Move, loser: Move) -> Option<&'static str> {
    RULES[winner.index()][loser.index()]
}

/// Returns true if `a` defeats `b`.
#[inline]
pub const fn beats(a: Move, b: Move) -> bool {
    justification(a, b).is_some()
}

/// Like [`justification`], but falls back to [`UNREACHABLE_REASON`] for a
/// non-winning pair (including equal moves).
pub fn reason(winner: Move, loser: Move) -> &'static str {
    justification(winner, loser).unwrap_or(UNREACHABLE_REASON)
}

impl Move {
    /// Returns true if `self` defeats `other`.
    #[inline]
    pub const fn beats(self, other: Move) -> bool {
        beats(self, other)
    }

    /// The two moves `self` defeats, in [`Move::ALL`] order.
    pub fn defeats(self) -> [Move; 2] {
        let mut out = [self; 2];
        let mut found = 0;
        for other in Move::ALL {
            if self.beats(other) {
                out[found] = other;
                found += 1;
            }
        }
        debug_assert_eq!(found, 2, "{self} must beat exactly two moves");
        out
    }
}

/// Adjudicates `player` against `opponent`.
pub fn determine_outcome(player: Move, opponent: Move) -> TurnResult {
    if player == opponent {
        return TurnResult {
            player_move: Some(player),
            opponent_move: Some(opponent),
            outcome: Outcome::Tie,
            reason: TIE_MESSAGE.to_string(),
        };
    }

    let (outcome, prefix, text) = match justification(player, opponent) {
        Some(text) => (Outcome::Win, WIN_PREFIX, text),
        None => {
            let text = justification(opponent, player);
            debug_assert!(
                text.is_some(),
                "rule table has no winner for {player} vs {opponent}"
            );
            (Outcome::Lose, LOSE_PREFIX, text.unwrap_or(UNREACHABLE_REASON))
        }
    };

    TurnResult {
        player_move: Some(player),
        opponent_move: Some(opponent),
        outcome,
        reason: format!("{prefix}{text}"),
    }
}
