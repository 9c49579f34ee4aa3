//! Piece colors and their fixed places on the shared track.

use serde::{Deserialize, Serialize};

/// Number of cells on the shared track.
pub const TRACK_LEN: u8 = 52;

/// Number of cells in each color's private run-in, counting the home cell.
pub const HOME_STRETCH_LEN: u8 = 6;

/// One of the four piece colors.
///
/// Each color enters the shared track at its own cell. Cells are numbered
/// 1..=52 in the direction of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in track order (by entry cell).
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Track cell a piece of this color occupies when it leaves base.
    #[must_use]
    pub const fn entry_cell(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 14,
            Color::Yellow => 27,
            Color::Blue => 40,
        }
    }

    /// Distance travelled from the entry cell at which a piece stands on the
    /// last shared cell before its run-in.
    ///
    /// The same for every color; the run-in starts one lap after entry.
    #[must_use]
    pub const fn home_threshold(self) -> u8 {
        TRACK_LEN - 1
    }

    /// Human-readable color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
