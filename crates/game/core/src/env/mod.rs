//! Oracles supplying inputs the rules cannot derive themselves.
//!
//! The only external input a turn needs is the opponent's move. It comes from
//! an injected [`OpponentOracle`] rather than a process-wide generator, so the
//! engine stays deterministic under test and replay.
mod opponent;

pub use opponent::{OpponentOracle, ScriptedOpponent};
