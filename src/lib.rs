//! # ludo-engine
//!
//! A four-player Ludo rules engine: turn order, dice, move legality, captures
//! and win detection.
//!
//! ## Design Principles
//!
//! 1. **Engine owns state**: All mutation goes through `LudoEngine`. Callers
//!    read immutable `GameStateView` snapshots and never hold a mutable handle.
//!
//! 2. **Rules refusals are outcomes, misuse is an error**: An overshoot or a
//!    base exit without a six is a normal `MoveOutcome`. Moving before rolling
//!    or picking an immovable piece is an `EngineError`.
//!
//! 3. **Deterministic**: Dice come from a seeded ChaCha8 stream, and
//!    `apply_roll` accepts external dice for replays.
//!
//! ## Architecture
//!
//! - **Position model**: Progress is distance travelled since a color's entry
//!   cell, so all four colors share the same thresholds.
//!
//! - **Persistent log**: The event log is an `im::Vector`, so snapshots are
//!   O(1) to take.
//!
//! ## Modules
//!
//! - `core`: Seats, colors, positions, state, events, RNG, configuration
//! - `rules`: Position model and the rules engine
//!
//! ## Example
//!
//! ```
//! use ludo_engine::LudoEngine;
//!
//! let mut engine = LudoEngine::with_seed(42);
//! let roll = engine.roll_dice().unwrap();
//! if let Some(&piece) = roll.legal_moves.first() {
//!     engine.apply_move(piece).unwrap();
//! }
//! let view = engine.snapshot();
//! assert!(!view.log.is_empty());
//! ```

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, PLAYER_COUNT,
    Color, TRACK_LEN, HOME_STRETCH_LEN,
    GameRng, GameRngState,
    LudoConfig, LudoConfigBuilder, Seat,
    ConfigError, EngineError, StateError,
    GameEvent, LogEntry,
    GameState, GameStateView, Phase, PlayerState, Position, PIECES_PER_PLAYER,
};

pub use crate::rules::{
    Advance, Capture, LegalMoves, LudoEngine, MoveOutcome, RollOutcome,
};
