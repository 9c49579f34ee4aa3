//! Game state and its read-only view.
//!
//! ## GameState
//!
//! Everything the engine mutates:
//! - Per-seat player state (pieces, six counter, finished count)
//! - Current player and pending roll
//! - Turn counter and winner
//! - Append-only event log
//!
//! ## GameStateView
//!
//! Immutable snapshot handed to the presentation layer. The log is an
//! `im::Vector`, so taking a snapshot shares structure with the live state
//! and costs O(1) regardless of game length.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::{LudoConfig, Seat};
use super::event::{GameEvent, LogEntry};
use super::player::{PlayerId, PlayerMap};

/// Pieces per player.
pub const PIECES_PER_PLAYER: usize = 4;

/// Where a piece is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered.
    #[default]
    InBase,
    /// On the shared track, absolute cell 1..=52.
    OnTrack(u8),
    /// In the color's private run-in, 1..=5 cells deep.
    InHomeStretch(u8),
    /// Reached the home cell.
    Finished,
}

impl Position {
    /// True if a roll can move this piece at all (ignoring overshoot).
    #[must_use]
    pub fn is_in_play(self) -> bool {
        matches!(self, Position::OnTrack(_) | Position::InHomeStretch(_))
    }

    /// Track cell, if the piece is on the shared track.
    #[must_use]
    pub fn track_cell(self) -> Option<u8> {
        match self {
            Position::OnTrack(cell) => Some(cell),
            _ => None,
        }
    }
}

/// Mutable per-seat state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub color: Color,
    pub pieces: [Position; PIECES_PER_PLAYER],
    /// Sixes rolled in a row; reset by any other roll.
    pub consecutive_sixes: u8,
    pub finished: u8,
}

impl PlayerState {
    /// A player with every piece in base.
    #[must_use]
    pub fn new(seat: &Seat) -> Self {
        Self {
            name: seat.name.clone(),
            color: seat.color,
            pieces: [Position::InBase; PIECES_PER_PLAYER],
            consecutive_sixes: 0,
            finished: 0,
        }
    }

    /// True once all four pieces are home.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.finished as usize == PIECES_PER_PLAYER
    }

    /// True while every piece is still in base.
    #[must_use]
    pub fn all_in_base(&self) -> bool {
        self.pieces.iter().all(|&p| p == Position::InBase)
    }
}

/// Where the turn state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current player must roll.
    AwaitingRoll,
    /// The current player must move a piece with this roll.
    AwaitingMove(u8),
    /// Terminal.
    GameOver { winner: PlayerId },
}

/// Complete game state. Owned exclusively by the engine.
#[derive(Clone, Debug)]
pub struct GameState {
    seats: PlayerMap<Seat>,
    pub(crate) players: PlayerMap<PlayerState>,
    pub(crate) current_player: PlayerId,
    pub(crate) last_roll: Option<u8>,
    pub(crate) turn_number: u32,
    pub(crate) winner: Option<PlayerId>,
    log: Vector<LogEntry>,
}

impl GameState {
    /// Fresh game: all pieces in base, first seat to roll.
    #[must_use]
    pub fn new(config: &LudoConfig) -> Self {
        Self {
            seats: config.seats().clone(),
            players: PlayerMap::new(|p| PlayerState::new(config.seat(p))),
            current_player: PlayerId::new(0),
            last_roll: None,
            turn_number: 1,
            winner: None,
            log: Vector::new(),
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.winner, self.last_roll) {
            (Some(winner), _) => Phase::GameOver { winner },
            (None, Some(roll)) => Phase::AwaitingMove(roll),
            (None, None) => Phase::AwaitingRoll,
        }
    }

    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    /// Append an event to the log, rendering its message.
    pub(crate) fn record(&mut self, event: GameEvent) {
        let message = event.describe(&self.seats);
        self.log.push_back(LogEntry {
            turn: self.turn_number,
            event,
            message,
        });
    }

    /// Pass the turn to the next seat. Leaves `last_roll` alone.
    pub(crate) fn next_player(&mut self) {
        self.current_player = self.current_player.next();
        self.turn_number += 1;
    }

    /// Take an immutable snapshot.
    #[must_use]
    pub fn view(&self) -> GameStateView {
        GameStateView {
            players: self.players.clone(),
            current_player: self.current_player,
            last_roll: self.last_roll,
            turn_number: self.turn_number,
            game_over: self.is_game_over(),
            winner: self.winner,
            start_cells: PlayerMap::new(|p| self.players[p].color.entry_cell()),
            log: self.log.clone(),
        }
    }
}

/// Read-only snapshot of the game for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub players: PlayerMap<PlayerState>,
    pub current_player: PlayerId,
    pub last_roll: Option<u8>,
    pub turn_number: u32,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    /// Entry cell of each seat's color.
    pub start_cells: PlayerMap<u8>,
    pub log: Vector<LogEntry>,
}

impl GameStateView {
    /// The log rendered as plain lines, oldest first.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(|e| e.message.clone()).collect()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }
}
