//! Game log events.
//!
//! Every state change the engine makes is recorded as a typed `GameEvent`
//! wrapped in a `LogEntry` together with the turn it happened on and the
//! rendered, human-readable message. The log is append-only and travels with
//! every snapshot, so a presentation layer can show it verbatim or filter it
//! by event kind.

use serde::{Deserialize, Serialize};

use super::config::Seat;
use super::player::{PlayerId, PlayerMap};
use super::state::Position;

/// Something that happened during the game.
///
/// Piece indices are 0-based; rendered messages number pieces from 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A die was rolled.
    Rolled { player: PlayerId, roll: u8 },

    /// Third six in a row: the roll is void and the turn passes.
    ThreeSixes { player: PlayerId },

    /// No piece can use the roll, so the turn passes.
    NoLegalMoves { player: PlayerId, roll: u8 },

    /// A piece entered the track on its start cell.
    LeftBase { player: PlayerId, piece: usize, cell: u8 },

    /// A piece in base was chosen without a six.
    NeedsSix { player: PlayerId, piece: usize },

    /// A piece moved along the track or the home stretch.
    Moved { player: PlayerId, piece: usize, to: Position },

    /// The roll would carry a piece past its home cell.
    Overshot { player: PlayerId, piece: usize, roll: u8 },

    /// A piece landed on an opponent and sent it back to base.
    Captured {
        player: PlayerId,
        piece: usize,
        victim: PlayerId,
        victim_piece: usize,
        cell: u8,
    },

    /// A piece reached its home cell.
    ReachedHome { player: PlayerId, piece: usize },

    /// A player brought all four pieces home.
    GameWon { player: PlayerId },
}

impl GameEvent {
    /// The player whose action produced this event.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            GameEvent::Rolled { player, .. }
            | GameEvent::ThreeSixes { player }
            | GameEvent::NoLegalMoves { player, .. }
            | GameEvent::LeftBase { player, .. }
            | GameEvent::NeedsSix { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::Overshot { player, .. }
            | GameEvent::Captured { player, .. }
            | GameEvent::ReachedHome { player, .. }
            | GameEvent::GameWon { player } => player,
        }
    }

    /// Render the event as a log line, naming players from `seats`.
    #[must_use]
    pub fn describe(&self, seats: &PlayerMap<Seat>) -> String {
        let piece_of = |player: PlayerId, piece: usize| {
            let seat = &seats[player];
            format!("{}'s {} piece {}", seat.name, seat.color, piece + 1)
        };

        match *self {
            GameEvent::Rolled { player, roll } => {
                format!("{} rolled a {}", seats[player].name, roll)
            }
            GameEvent::ThreeSixes { player } => format!(
                "{} rolled three 6s in a row and loses their turn.",
                seats[player].name
            ),
            GameEvent::NoLegalMoves { player, roll } => format!(
                "{} has no valid moves with a {}. Next turn.",
                seats[player].name, roll
            ),
            GameEvent::LeftBase { player, piece, .. } => format!(
                "{} moved out of base to start position.",
                piece_of(player, piece)
            ),
            GameEvent::NeedsSix { player, piece } => {
                format!("{} needs a 6 to move out of base.", piece_of(player, piece))
            }
            GameEvent::Moved { player, piece, to } => match to {
                Position::OnTrack(cell) => format!("{} moved to {}.", piece_of(player, piece), cell),
                Position::InHomeStretch(k) => {
                    format!("{} moved to home stretch {}.", piece_of(player, piece), k)
                }
                other => format!("{} moved to {:?}.", piece_of(player, piece), other),
            },
            GameEvent::Overshot { player, piece, roll } => format!(
                "{} cannot move beyond home with {}.",
                piece_of(player, piece),
                roll
            ),
            GameEvent::Captured {
                player,
                piece,
                victim,
                victim_piece,
                ..
            } => format!(
                "{} landed on {}, sending it back to base!",
                piece_of(player, piece),
                piece_of(victim, victim_piece)
            ),
            GameEvent::ReachedHome { player, piece } => {
                format!("{} reached home!", piece_of(player, piece))
            }
            GameEvent::GameWon { player } => format!("Game Over! {} wins!", seats[player].name),
        }
    }
}

/// One line of the game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn on which the event happened (starts at 1).
    pub turn: u32,
    pub event: GameEvent,
    /// Rendered message.
    pub message: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LudoConfig;

    fn seats() -> PlayerMap<Seat> {
        LudoConfig::default().seats().clone()
    }

    #[test]
    fn test_roll_messages() {
        let seats = seats();
        let p0 = PlayerId::new(0);

        assert_eq!(
            GameEvent::Rolled { player: p0, roll: 4 }.describe(&seats),
            "Player 1 rolled a 4"
        );
        assert_eq!(
            GameEvent::ThreeSixes { player: p0 }.describe(&seats),
            "Player 1 rolled three 6s in a row and loses their turn."
        );
    }

    #[test]
    fn test_capture_message_names_both_pieces() {
        let event = GameEvent::Captured {
            player: PlayerId::new(1),
            piece: 0,
            victim: PlayerId::new(0),
            victim_piece: 2,
            cell: 10,
        };

        assert_eq!(
            event.describe(&seats()),
            "Player 2's Green piece 1 landed on Player 1's Red piece 3, sending it back to base!"
        );
        assert_eq!(event.player(), PlayerId::new(1));
    }

    #[test]
    fn test_move_messages() {
        let seats = seats();
        let p2 = PlayerId::new(2);

        assert_eq!(
            GameEvent::Moved { player: p2, piece: 1, to: Position::OnTrack(44) }.describe(&seats),
            "Player 3's Blue piece 2 moved to 44."
        );
        assert_eq!(
            GameEvent::Moved { player: p2, piece: 1, to: Position::InHomeStretch(3) }
                .describe(&seats),
            "Player 3's Blue piece 2 moved to home stretch 3."
        );
    }
}
