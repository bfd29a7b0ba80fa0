//! Uniformly random opponent.

use game_core::{Move, OpponentOracle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks each opponent move uniformly from [`Move::ALL`].
///
/// The generator is owned by the oracle, so a session that owns the oracle
/// owns its random stream as well.
#[derive(Clone, Debug)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    /// Oracle seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Oracle with a reproducible move sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OpponentOracle for RandomOpponent<R> {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_moves() {
        let mut a = RandomOpponent::seeded(42);
        let mut b = RandomOpponent::seeded(42);

        for _ in 0..32 {
            assert_eq!(a.next_move(), b.next_move());
        }
    }

    #[test]
    fn draws_every_move_roughly_evenly() {
        let mut oracle = RandomOpponent::seeded(7);
        let mut counts = [0usize; Move::COUNT];

        for _ in 0..5_000 {
            counts[oracle.next_move().index()] += 1;
        }

        for (mv, count) in Move::ALL.iter().zip(counts) {
            assert!(
                (800..=1_200).contains(&count),
                "{mv} drawn {count} times out of 5000"
            );
        }
    }

    #[test]
    fn entropy_oracle_returns_legal_moves() {
        let mut oracle = RandomOpponent::from_entropy();
        for _ in 0..16 {
            assert!(Move::ALL.contains(&oracle.next_move()));
        }
    }
}
