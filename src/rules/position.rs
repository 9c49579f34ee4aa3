//! Position model: how far a roll carries a piece.
//!
//! Pieces travel one full lap of the shared track starting from their color's
//! entry cell, then turn off into a private run-in. Progress is measured as
//! distance travelled since entry, not as an absolute cell, so every color uses
//! the same thresholds:
//!
//! | distance | position                         |
//! |----------|----------------------------------|
//! | 0..=51   | `OnTrack(cell_at(distance))`     |
//! | 52..=56  | `InHomeStretch(distance - 51)`   |
//! | 57       | home (`Finished`)                |
//!
//! Everything here is pure and stateless.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Position, HOME_STRETCH_LEN, TRACK_LEN};

/// Roll needed to bring a piece out of base.
pub const ENTRY_ROLL: u8 = 6;

/// Distance travelled when a piece stands on its home cell.
pub const HOME_DISTANCE: u8 = TRACK_LEN - 1 + HOME_STRETCH_LEN;

/// Result of applying a roll to one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advance {
    /// In base and the roll is not a six.
    StaysInBase,
    /// Leaves base onto this entry cell.
    EntersTrack(u8),
    /// Lands on this track cell.
    MovesOnTrack(u8),
    /// Lands this many cells deep into the run-in.
    EntersHomeStretch(u8),
    /// Lands exactly on the home cell.
    ReachesHome,
    /// Would pass the home cell; the piece does not move.
    Overshoots,
}

impl Advance {
    /// Position the piece ends up in, or `None` if it does not move.
    #[must_use]
    pub fn destination(self) -> Option<Position> {
        match self {
            Advance::StaysInBase | Advance::Overshoots => None,
            Advance::EntersTrack(cell) | Advance::MovesOnTrack(cell) => Some(Position::OnTrack(cell)),
            Advance::EntersHomeStretch(k) => Some(Position::InHomeStretch(k)),
            Advance::ReachesHome => Some(Position::Finished),
        }
    }
}

/// Track cell a piece of `color` occupies when it leaves base.
#[must_use]
pub fn entry_cell(color: Color) -> u8 {
    color.entry_cell()
}

/// True if `cell` is any color's entry cell.
#[must_use]
pub fn is_entry_cell(cell: u8) -> bool {
    Color::ALL.iter().any(|c| c.entry_cell() == cell)
}

/// Distance a piece has travelled since entering the track.
///
/// `None` for pieces still in base.
#[must_use]
pub fn distance_travelled(position: Position, color: Color) -> Option<u8> {
    match position {
        Position::InBase => None,
        Position::OnTrack(cell) => Some((cell + TRACK_LEN - color.entry_cell()) % TRACK_LEN),
        Position::InHomeStretch(k) => Some(color.home_threshold() + k),
        Position::Finished => Some(HOME_DISTANCE),
    }
}

/// Absolute track cell reached after travelling `distance` from `color`'s
/// entry cell. Only meaningful for distances up to the home threshold.
#[must_use]
pub fn cell_at(distance: u8, color: Color) -> u8 {
    ((u16::from(color.entry_cell()) - 1 + u16::from(distance)) % u16::from(TRACK_LEN)) as u8 + 1
}

/// Apply a roll of `steps` to a piece of `color` at `position`.
///
/// ```
/// use ludo_engine::core::{Color, Position};
/// use ludo_engine::rules::position::{advance, Advance};
///
/// assert_eq!(advance(Position::InBase, 6, Color::Green), Advance::EntersTrack(14));
/// assert_eq!(advance(Position::OnTrack(50), 3, Color::Red), Advance::EntersHomeStretch(1));
/// assert_eq!(advance(Position::InHomeStretch(4), 3, Color::Red), Advance::Overshoots);
/// ```
#[must_use]
pub fn advance(position: Position, steps: u8, color: Color) -> Advance {
    let Some(travelled) = distance_travelled(position, color) else {
        return if steps == ENTRY_ROLL {
            Advance::EntersTrack(color.entry_cell())
        } else {
            Advance::StaysInBase
        };
    };

    if position == Position::Finished {
        return Advance::Overshoots;
    }

    let target = travelled.saturating_add(steps);
    let threshold = color.home_threshold();

    if target <= threshold {
        Advance::MovesOnTrack(cell_at(target, color))
    } else if target < HOME_DISTANCE {
        Advance::EntersHomeStretch(target - threshold)
    } else if target == HOME_DISTANCE {
        Advance::ReachesHome
    } else {
        Advance::Overshoots
    }
}
