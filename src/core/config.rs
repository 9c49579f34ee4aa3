//! Table configuration.
//!
//! A `LudoConfig` fixes who sits where and how the dice are seeded:
//! - Player names, one per seat
//! - Seating colors, one per seat (seat order is turn order)
//! - RNG seed (drawn from system entropy when absent)
//!
//! Build one with `LudoConfig::builder()`; the defaults reproduce the classic
//! table of "Player 1".."Player 4" seated Red, Green, Blue, Yellow.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;
use super::player::{PlayerId, PlayerMap, PLAYER_COUNT};

/// Identity of one seat: display name and piece color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub color: Color,
}

/// Complete table configuration.
///
/// Deserializing runs the same checks as `LudoConfigBuilder::build`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct LudoConfig {
    seats: PlayerMap<Seat>,
    seed: Option<u64>,
}

/// Unchecked serialized form of `LudoConfig`.
#[derive(Deserialize)]
struct RawConfig {
    seats: PlayerMap<Seat>,
    seed: Option<u64>,
}

impl TryFrom<RawConfig> for LudoConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut builder = LudoConfigBuilder {
            seed: raw.seed,
            ..LudoConfigBuilder::default()
        };
        for (slot, seat) in builder.seats.iter_mut().zip(raw.seats.values()) {
            *slot = (seat.name.clone(), seat.color);
        }
        builder.build()
    }
}

impl LudoConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> LudoConfigBuilder {
        LudoConfigBuilder::default()
    }

    /// Default table with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Seat identities in turn order.
    #[must_use]
    pub fn seats(&self) -> &PlayerMap<Seat> {
        &self.seats
    }

    /// Identity of one seat.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &Seat {
        &self.seats[player]
    }

    /// RNG seed, if one was fixed.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for LudoConfig {
    fn default() -> Self {
        LudoConfigBuilder::default().into_config()
    }
}

/// Builder for `LudoConfig`.
#[derive(Clone, Debug)]
pub struct LudoConfigBuilder {
    seats: [(String, Color); PLAYER_COUNT],
    seed: Option<u64>,
}

impl Default for LudoConfigBuilder {
    fn default() -> Self {
        Self {
            seats: [
                ("Player 1".to_string(), Color::Red),
                ("Player 2".to_string(), Color::Green),
                ("Player 3".to_string(), Color::Blue),
                ("Player 4".to_string(), Color::Yellow),
            ],
            seed: None,
        }
    }
}

impl LudoConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name shown for each seat.
    #[must_use]
    pub fn player_names<S: Into<String>>(mut self, names: [S; PLAYER_COUNT]) -> Self {
        for (seat, name) in self.seats.iter_mut().zip(names) {
            seat.0 = name.into();
        }
        self
    }

    /// Set the color of each seat.
    #[must_use]
    pub fn seating(mut self, colors: [Color; PLAYER_COUNT]) -> Self {
        for (seat, color) in self.seats.iter_mut().zip(colors) {
            seat.1 = color;
        }
        self
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<LudoConfig, ConfigError> {
        for (i, (name, color)) in self.seats.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName(i));
            }
            if self.seats[..i].iter().any(|(_, c)| c == color) {
                return Err(ConfigError::DuplicateColor(*color));
            }
        }

        Ok(self.into_config())
    }

    fn into_config(self) -> LudoConfig {
        let seats = self.seats;
        LudoConfig {
            seats: PlayerMap::new(|p| Seat {
                name: seats[p.index()].0.clone(),
                color: seats[p.index()].1,
            }),
            seed: self.seed,
        }
    }
}
