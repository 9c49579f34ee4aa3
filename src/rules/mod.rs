//! Ludo rules.
//!
//! - `position`: pure mapping from a piece's position and a roll to where the
//!   piece ends up
//! - `engine`: the turn state machine that owns the game state and applies
//!   rolls, moves, captures and win detection

pub mod position;
pub mod engine;

pub use position::{advance, Advance};
pub use engine::{Capture, LegalMoves, LudoEngine, MoveOutcome, RollOutcome, MAX_CONSECUTIVE_SIXES};
