//! Engine bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{EngineError, LudoConfig, PlayerId, Position, TRACK_LEN};
use crate::rules::{LudoEngine, MoveOutcome, RollOutcome};

/// Piece code for a finished piece in `LudoGame.pieces()`.
const FINISHED_CODE: u8 = 100;

fn engine_err(err: EngineError) -> PyErr {
    match err {
        EngineError::InvalidState(_) => PyRuntimeError::new_err(err.to_string()),
        EngineError::InvalidMove { .. } | EngineError::InvalidRoll(_) => {
            PyValueError::new_err(err.to_string())
        }
    }
}

fn seat(player: usize) -> PyResult<PlayerId> {
    PlayerId::from_index(player)
        .ok_or_else(|| PyValueError::new_err(format!("no seat {}", player)))
}

/// Encode a position as a single integer: 0 base, 1-52 track cell,
/// 53-57 home stretch, 100 finished.
fn position_code(position: Position) -> u8 {
    match position {
        Position::InBase => 0,
        Position::OnTrack(cell) => cell,
        Position::InHomeStretch(k) => TRACK_LEN + k,
        Position::Finished => FINISHED_CODE,
    }
}

/// Python view of a roll.
#[pyclass(name = "RollOutcome")]
#[derive(Clone, Debug)]
pub struct PyRollOutcome {
    #[pyo3(get)]
    roll: u8,
    #[pyo3(get)]
    turn_forfeited: bool,
    #[pyo3(get)]
    turn_passed: bool,
    #[pyo3(get)]
    legal_moves: Vec<usize>,
}

impl From<RollOutcome> for PyRollOutcome {
    fn from(outcome: RollOutcome) -> Self {
        Self {
            roll: outcome.roll,
            turn_forfeited: outcome.turn_forfeited,
            turn_passed: outcome.turn_passed,
            legal_moves: outcome.legal_moves.to_vec(),
        }
    }
}

#[pymethods]
impl PyRollOutcome {
    fn __repr__(&self) -> String {
        format!(
            "RollOutcome(roll={}, turn_forfeited={}, turn_passed={}, legal_moves={:?})",
            self.roll, self.turn_forfeited, self.turn_passed, self.legal_moves
        )
    }
}

/// Python view of a move.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome {
    #[pyo3(get)]
    moved: bool,
    #[pyo3(get)]
    finished: bool,
    /// (player, piece) pairs sent back to base.
    #[pyo3(get)]
    captured: Vec<(usize, usize)>,
    #[pyo3(get)]
    turn_passed: bool,
}

impl From<MoveOutcome> for PyMoveOutcome {
    fn from(outcome: MoveOutcome) -> Self {
        Self {
            moved: outcome.moved,
            finished: outcome.finished,
            captured: outcome
                .captured
                .iter()
                .map(|c| (c.player.index(), c.piece))
                .collect(),
            turn_passed: outcome.turn_passed,
        }
    }
}

#[pymethods]
impl PyMoveOutcome {
    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(moved={}, finished={}, captured={:?}, turn_passed={})",
            self.moved, self.finished, self.captured, self.turn_passed
        )
    }
}

/// Python wrapper for LudoEngine.
#[pyclass(name = "LudoGame")]
pub struct PyLudoGame {
    engine: LudoEngine,
}

#[pymethods]
impl PyLudoGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic dice (random if omitted)
    /// - names: four player names in seat order
    #[new]
    #[pyo3(signature = (seed = None, names = None))]
    fn new(seed: Option<u64>, names: Option<Vec<String>>) -> PyResult<Self> {
        let mut builder = LudoConfig::builder();
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        if let Some(names) = names {
            let names: [String; 4] = names
                .try_into()
                .map_err(|_| PyValueError::new_err("exactly four names are required"))?;
            builder = builder.player_names(names);
        }
        let config = builder
            .build()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self {
            engine: LudoEngine::new(config),
        })
    }

    /// Roll the die for the current player.
    fn roll_dice(&mut self) -> PyResult<PyRollOutcome> {
        self.engine.roll_dice().map(Into::into).map_err(engine_err)
    }

    /// Use an externally rolled die value.
    fn apply_roll(&mut self, roll: u8) -> PyResult<PyRollOutcome> {
        self.engine.apply_roll(roll).map(Into::into).map_err(engine_err)
    }

    /// Pieces of a player that may move with a roll.
    fn legal_moves(&self, player: usize, roll: u8) -> PyResult<Vec<usize>> {
        Ok(self.engine.legal_moves(seat(player)?, roll).to_vec())
    }

    /// Pieces the current player may move with the pending roll.
    fn current_legal_moves(&self) -> Vec<usize> {
        self.engine.current_legal_moves().to_vec()
    }

    /// Move one of the current player's pieces by the pending roll.
    fn apply_move(&mut self, piece: usize) -> PyResult<PyMoveOutcome> {
        self.engine.apply_move(piece).map(Into::into).map_err(engine_err)
    }

    /// Start a fresh game.
    fn reset(&mut self) {
        self.engine.reset();
    }

    #[getter]
    fn current_player(&self) -> usize {
        self.engine.current_player().index()
    }

    #[getter]
    fn last_roll(&self) -> Option<u8> {
        self.engine.last_roll()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    #[getter]
    fn winner(&self) -> Option<usize> {
        self.engine.winner().map(PlayerId::index)
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.engine.state().turn_number()
    }

    /// A player's display name.
    fn name(&self, player: usize) -> PyResult<String> {
        Ok(self.engine.state().player(seat(player)?).name.clone())
    }

    /// A player's color name.
    fn color(&self, player: usize) -> PyResult<String> {
        Ok(self.engine.state().player(seat(player)?).color.to_string())
    }

    /// A player's piece positions: 0 base, 1-52 track, 53-57 home stretch,
    /// 100 finished.
    fn pieces(&self, player: usize) -> PyResult<Vec<u8>> {
        let state = self.engine.state().player(seat(player)?);
        Ok(state.pieces.iter().map(|&p| position_code(p)).collect())
    }

    /// Number of a player's pieces that reached home.
    fn finished_pieces(&self, player: usize) -> PyResult<u8> {
        Ok(self.engine.state().player(seat(player)?).finished)
    }

    /// Sixes a player has rolled in a row.
    fn six_rolls_in_a_row(&self, player: usize) -> PyResult<u8> {
        Ok(self.engine.state().player(seat(player)?).consecutive_sixes)
    }

    /// Entry cell of each seat, in seat order.
    fn start_positions(&self) -> Vec<u8> {
        self.engine.snapshot().start_cells.values().copied().collect()
    }

    /// The game log, oldest first.
    fn log(&self) -> Vec<String> {
        self.engine.snapshot().log_lines()
    }

    /// Full snapshot of the game as a JSON string.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.engine.snapshot())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let status = if self.engine.is_game_over() {
            "over"
        } else {
            "ongoing"
        };
        format!(
            "LudoGame(turn={}, current=P{}, status={})",
            self.engine.state().turn_number(),
            self.engine.current_player().index() + 1,
            status
        )
    }
}
