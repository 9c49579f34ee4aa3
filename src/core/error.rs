//! Engine error types.
//!
//! Every error here is a caller mistake (acting out of turn, moving before
//! rolling, clicking a piece that cannot move). Rule refusals that normal play
//! can reach, such as an overshoot, are reported as outcomes instead.

use thiserror::Error;

use super::color::Color;

/// Reason an operation is not allowed in the engine's current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("the game is over")]
    GameOver,

    #[error("a roll of {0} is pending; move a piece first")]
    RollPending(u8),

    #[error("no roll is pending; roll the dice first")]
    NoRollPending,
}

/// Error returned by engine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),

    #[error("piece {piece} cannot be moved with a roll of {roll}")]
    InvalidMove { piece: usize, roll: u8 },

    #[error("die value {0} is outside 1..=6")]
    InvalidRoll(u8),
}

impl EngineError {
    /// True for errors raised because the engine was in the wrong state.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, EngineError::InvalidState(_))
    }
}

/// Error returned when building a `LudoConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("color {0} is seated more than once")]
    DuplicateColor(Color),

    #[error("player name for seat {0} is empty")]
    EmptyName(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err: EngineError = StateError::NoRollPending.into();
        assert!(err.is_invalid_state());
        assert_eq!(err.to_string(), "invalid state: no roll is pending; roll the dice first");

        let err = EngineError::InvalidMove { piece: 2, roll: 4 };
        assert!(!err.is_invalid_state());
        assert_eq!(err.to_string(), "piece 2 cannot be moved with a roll of 4");

        assert_eq!(
            ConfigError::DuplicateColor(Color::Blue).to_string(),
            "color Blue is seated more than once"
        );
    }
}
