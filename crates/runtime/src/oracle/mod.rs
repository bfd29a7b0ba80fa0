//! Runtime implementations of `game-core` oracle traits.
//!
//! `game-core` only defines how the opponent's move is obtained; the
//! randomness itself lives here so the core stays free of I/O and entropy.
mod random;

pub use random::RandomOpponent;
