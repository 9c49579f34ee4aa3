//! Core engine types: seats, colors, state, events, RNG, configuration.
//!
//! This module holds the data model. The rules that mutate it live in
//! `crate::rules`.

pub mod player;
pub mod color;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use color::{Color, HOME_STRETCH_LEN, TRACK_LEN};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{LudoConfig, LudoConfigBuilder, Seat};
pub use error::{ConfigError, EngineError, StateError};
pub use event::{GameEvent, LogEntry};
pub use state::{GameState, GameStateView, Phase, PlayerState, Position, PIECES_PER_PLAYER};
