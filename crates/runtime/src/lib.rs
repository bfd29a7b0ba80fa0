//! Session runtime for the rock-paper-scissors-lizard-spock game.
//!
//! This crate wires the pure rules in `game-core` to persistence and
//! randomness. Consumers open a [`Session`] and drive it turn by turn; each
//! change to the game state is saved through a [`StateStore`] before control
//! returns.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the per-player orchestrator
//! - [`turn`] runs a single turn end to end
//! - [`store`] and [`repository`] persist the game document
//! - [`oracle`] provides the random opponent
//! - [`config`] reads environment configuration
pub mod config;
pub mod oracle;
pub mod repository;
pub mod session;
pub mod store;
pub mod turn;

pub use config::RuntimeConfig;
pub use oracle::RandomOpponent;
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, STATE_FILE_NAME, StateRepository,
};
pub use session::{FileSession, Session};
pub use store::StateStore;
pub use turn::submit_turn;
