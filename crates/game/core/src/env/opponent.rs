//! Opponent move selection.

use crate::action::Move;

/// Source of the opponent's move for each valid turn.
///
/// Called exactly once per accepted submission and never for a rejected one.
/// Implementations may keep generator state, hence `&mut self`; a session
/// owns its oracle exclusively.
pub trait OpponentOracle {
    fn next_move(&mut self) -> Move;
}

impl<O: OpponentOracle + ?Sized> OpponentOracle for &mut O {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

impl<O: OpponentOracle + ?Sized> OpponentOracle for Box<O> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

/// Replays a fixed sequence of moves, wrapping around once exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    script: Vec<Move>,
    cursor: usize,
    calls: usize,
}

impl ScriptedOpponent {
    /// Creates an oracle that plays `script` in order.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl IntoIterator<Item = Move>) -> Self {
        let script: Vec<Move> = script.into_iter().collect();
        assert!(!script.is_empty(), "opponent script must not be empty");
        Self {
            script,
            cursor: 0,
            calls: 0,
        }
    }

    /// Creates an oracle that always plays `mv`.
    pub fn always(mv: Move) -> Self {
        Self::new([mv])
    }

    /// Number of moves handed out so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl OpponentOracle for ScriptedOpponent {
    fn next_move(&mut self) -> Move {
        let mv = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        self.calls += 1;
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_and_wraps() {
        let mut oracle = ScriptedOpponent::new([Move::Rock, Move::Spock]);
        assert_eq!(oracle.next_move(), Move::Rock);
        assert_eq!(oracle.next_move(), Move::Spock);
        assert_eq!(oracle.next_move(), Move::Rock);
        assert_eq!(oracle.calls(), 3);
    }

    #[test]
    fn works_through_a_mutable_reference() {
        fn draw<O: OpponentOracle>(mut oracle: O) -> Move {
            oracle.next_move()
        }

        let mut oracle = ScriptedOpponent::always(Move::Lizard);
        assert_eq!(draw(&mut oracle), Move::Lizard);
        assert_eq!(oracle.calls(), 1);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_script_is_rejected() {
        let _ = ScriptedOpponent::new(Vec::new());
    }
}
