//! Player-facing move vocabulary.
//!
//! A [`Move`] is one of the five hand-signs. Its textual form (`"rock"`,
//! `"paper"`, ...) is shared by parsing, display and the persisted document,
//! so the same spelling round-trips through every layer.

mod error;

pub use error::InvalidMove;

/// One of the five playable hand-signs.
///
/// Discriminants are stable and index the rule table in [`crate::rules`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

impl Move {
    /// Every legal move, in menu order.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Number of legal moves.
    pub const COUNT: usize = Self::ALL.len();

    /// Row/column of this move in the rule table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parses a raw move candidate.
    ///
    /// Only the exact lowercase names are legal; surrounding whitespace or a
    /// different case is rejected.
    pub fn parse(raw: &str) -> Result<Move, InvalidMove> {
        raw.parse::<Move>().map_err(|_| InvalidMove::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_lowercase_name() {
        for mv in Move::ALL {
            assert_eq!(Move::parse(&mv.to_string()), Ok(mv));
        }
        assert_eq!(Move::parse("spock"), Ok(Move::Spock));
    }

    #[test]
    fn rejects_unknown_input() {
        let err = Move::parse("banana").unwrap_err();
        assert_eq!(err.input(), "banana");

        assert!(Move::parse("").is_err());
        assert!(Move::parse(" rock").is_err());
        assert!(Move::parse("Rock").is_err());
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, mv) in Move::ALL.into_iter().enumerate() {
            assert_eq!(mv.index(), i);
        }
        assert_eq!(Move::Spock.index(), Move::COUNT - 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Move::Lizard).unwrap();
        assert_eq!(json, "\"lizard\"");
        assert!(serde_json::from_str::<Move>("\"banana\"").is_err());
    }
}
