//! The Ludo rules engine.
//!
//! `LudoEngine` owns the game state and is the only thing that mutates it.
//! A presentation layer drives it with a fixed cycle:
//!
//! 1. `roll_dice()` (or `apply_roll()` for externally rolled dice)
//! 2. `legal_moves()` / `current_legal_moves()` to highlight movable pieces
//! 3. `apply_move(piece)`
//! 4. `snapshot()` to re-render
//!
//! ## Turn rules
//!
//! - A six grants another roll after the move resolves; three sixes in a row
//!   void the third roll and pass the turn.
//! - A roll nobody can use passes the turn automatically.
//! - A piece in base chosen without a six, or a move that would pass the home
//!   cell, uses up the roll and always passes the turn.
//! - Landing on opponents sends them back to base, except on any color's
//!   entry cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    EngineError, GameEvent, GameRng, GameRngState, GameState, GameStateView, LudoConfig, Phase,
    PlayerId, Position, StateError, DIE_FACES, PIECES_PER_PLAYER,
};

use super::position::{self, Advance, ENTRY_ROLL};

/// Sixes in a row that forfeit the turn.
pub const MAX_CONSECUTIVE_SIXES: u8 = 3;

/// Indices of pieces that may be moved with a roll.
pub type LegalMoves = SmallVec<[usize; PIECES_PER_PLAYER]>;

/// An opponent piece sent back to base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub player: PlayerId,
    pub piece: usize,
}

/// Result of a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub roll: u8,
    /// Third six in a row: the roll was void and the turn passed.
    pub turn_forfeited: bool,
    /// The turn passed without a move (forfeit or no legal move).
    pub turn_passed: bool,
    /// Pieces the roller may now move; empty when the turn passed.
    pub legal_moves: LegalMoves,
}

/// Result of a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The piece changed position.
    pub moved: bool,
    /// The piece reached home.
    pub finished: bool,
    pub captured: SmallVec<[Capture; 4]>,
    /// How the roll resolved for the piece.
    pub advance: Advance,
    /// The turn passed to the next player.
    pub turn_passed: bool,
}

/// Four-player Ludo engine.
#[derive(Clone, Debug)]
pub struct LudoEngine {
    config: LudoConfig,
    state: GameState,
    rng: GameRng,
}

impl LudoEngine {
    /// Create an engine for a fresh game.
    ///
    /// Dice are seeded from `config`, or from system entropy when no seed is
    /// set.
    #[must_use]
    pub fn new(config: LudoConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            state: GameState::new(&config),
            config,
            rng,
        }
    }

    /// Default table with seeded dice.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(LudoConfig::with_seed(seed))
    }

    #[must_use]
    pub fn config(&self) -> &LudoConfig {
        &self.config
    }

    /// Borrow the live state read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.state.last_roll()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Dice state, for reproducing the rest of the game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Immutable snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameStateView {
        self.state.view()
    }

    /// Start a fresh game with the same table. The dice keep rolling from
    /// where they were, so consecutive games differ.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
    }

    // === Rolling ===

    /// Roll the die for the current player.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, EngineError> {
        self.ensure_can_roll()?;
        let roll = self.rng.roll_die();
        Ok(self.resolve_roll(roll))
    }

    /// Use an externally rolled die value for the current player.
    pub fn apply_roll(&mut self, roll: u8) -> Result<RollOutcome, EngineError> {
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(EngineError::InvalidRoll(roll));
        }
        self.ensure_can_roll()?;
        Ok(self.resolve_roll(roll))
    }

    fn ensure_can_roll(&self) -> Result<(), StateError> {
        match self.state.phase() {
            Phase::AwaitingRoll => Ok(()),
            Phase::AwaitingMove(roll) => Err(StateError::RollPending(roll)),
            Phase::GameOver { .. } => Err(StateError::GameOver),
        }
    }

    fn resolve_roll(&mut self, roll: u8) -> RollOutcome {
        let player = self.state.current_player();
        self.state.record(GameEvent::Rolled { player, roll });

        let roller = self.state.player_mut(player);
        if roll == 6 {
            roller.consecutive_sixes += 1;
            if roller.consecutive_sixes >= MAX_CONSECUTIVE_SIXES {
                roller.consecutive_sixes = 0;
                self.state.record(GameEvent::ThreeSixes { player });
                self.end_turn();
                return RollOutcome {
                    roll,
                    turn_forfeited: true,
                    turn_passed: true,
                    legal_moves: LegalMoves::new(),
                };
            }
        } else {
            roller.consecutive_sixes = 0;
        }

        self.state.last_roll = Some(roll);

        let legal_moves = self.legal_moves(player, roll);
        let turn_passed = legal_moves.is_empty();
        if turn_passed {
            self.state.record(GameEvent::NoLegalMoves { player, roll });
            self.end_turn();
        }

        RollOutcome {
            roll,
            turn_forfeited: false,
            turn_passed,
            legal_moves,
        }
    }

    // === Moving ===

    /// Pieces of `player` that may be moved with `roll`.
    ///
    /// A piece in base needs a six; any piece on the track or in the home
    /// stretch qualifies. Overshoot is not checked here: it is resolved (and
    /// consumes the roll) in `apply_move`. Empty for a seat that does not
    /// exist.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId, roll: u8) -> LegalMoves {
        let Some(owner) = self.state.players.try_get(player) else {
            return LegalMoves::new();
        };
        owner
            .pieces
            .iter()
            .enumerate()
            .filter(|&(_, &pos)| pos.is_in_play() || (pos == Position::InBase && roll == ENTRY_ROLL))
            .map(|(i, _)| i)
            .collect()
    }

    /// Legal moves for the current player's pending roll; empty if none.
    #[must_use]
    pub fn current_legal_moves(&self) -> LegalMoves {
        match self.state.phase() {
            Phase::AwaitingMove(roll) => self.legal_moves(self.state.current_player(), roll),
            _ => LegalMoves::new(),
        }
    }

    /// Move one of the current player's pieces by the pending roll.
    pub fn apply_move(&mut self, piece: usize) -> Result<MoveOutcome, EngineError> {
        let roll = match self.state.phase() {
            Phase::AwaitingMove(roll) => roll,
            Phase::AwaitingRoll => return Err(StateError::NoRollPending.into()),
            Phase::GameOver { .. } => return Err(StateError::GameOver.into()),
        };

        let player = self.state.current_player();
        if !self.legal_moves(player, roll).contains(&piece) {
            return Err(EngineError::InvalidMove { piece, roll });
        }

        Ok(self.resolve_move(player, piece, roll))
    }

    fn resolve_move(&mut self, player: PlayerId, piece: usize, roll: u8) -> MoveOutcome {
        let color = self.state.player(player).color;
        let from = self.state.player(player).pieces[piece];
        let advance = position::advance(from, roll, color);

        let mut outcome = MoveOutcome {
            moved: false,
            finished: false,
            captured: SmallVec::new(),
            advance,
            turn_passed: false,
        };

        let keeps_turn = match advance {
            Advance::StaysInBase => {
                self.state.record(GameEvent::NeedsSix { player, piece });
                false
            }
            Advance::Overshoots => {
                self.state.record(GameEvent::Overshot { player, piece, roll });
                false
            }
            Advance::EntersTrack(cell) => {
                self.place(player, piece, Position::OnTrack(cell));
                self.state.record(GameEvent::LeftBase { player, piece, cell });
                roll == 6
            }
            Advance::MovesOnTrack(cell) => {
                self.place(player, piece, Position::OnTrack(cell));
                self.state.record(GameEvent::Moved {
                    player,
                    piece,
                    to: Position::OnTrack(cell),
                });
                outcome.captured = self.resolve_captures(player, piece, cell);
                roll == 6
            }
            Advance::EntersHomeStretch(k) => {
                self.place(player, piece, Position::InHomeStretch(k));
                self.state.record(GameEvent::Moved {
                    player,
                    piece,
                    to: Position::InHomeStretch(k),
                });
                roll == 6
            }
            Advance::ReachesHome => {
                self.place(player, piece, Position::Finished);
                let owner = self.state.player_mut(player);
                owner.finished += 1;
                let won = owner.all_finished();
                self.state.record(GameEvent::ReachedHome { player, piece });
                if won {
                    self.state.winner = Some(player);
                    self.state.record(GameEvent::GameWon { player });
                }
                outcome.finished = true;
                roll == 6
            }
        };

        outcome.moved = advance.destination().is_some();
        if keeps_turn {
            self.state.last_roll = None;
        } else {
            self.end_turn();
            outcome.turn_passed = true;
        }
        outcome
    }

    /// Send every opponent piece on `cell` back to base. Entry cells are
    /// safe for everyone.
    fn resolve_captures(
        &mut self,
        player: PlayerId,
        piece: usize,
        cell: u8,
    ) -> SmallVec<[Capture; 4]> {
        let mut captured = SmallVec::new();
        if position::is_entry_cell(cell) {
            return captured;
        }

        let color = self.state.player(player).color;
        for victim in PlayerId::all() {
            if self.state.player(victim).color == color {
                continue;
            }

            for victim_piece in 0..PIECES_PER_PLAYER {
                if self.state.player(victim).pieces[victim_piece] != Position::OnTrack(cell) {
                    continue;
                }
                self.place(victim, victim_piece, Position::InBase);
                self.state.record(GameEvent::Captured {
                    player,
                    piece,
                    victim,
                    victim_piece,
                    cell,
                });
                captured.push(Capture {
                    player: victim,
                    piece: victim_piece,
                });
            }
        }

        captured
    }

    fn place(&mut self, player: PlayerId, piece: usize, position: Position) {
        self.state.player_mut(player).pieces[piece] = position;
    }

    /// Clear the pending roll and hand the turn to the next seat.
    fn end_turn(&mut self) {
        self.state.last_roll = None;
        self.state.next_player();
    }
}
