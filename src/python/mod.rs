//! Python bindings for the Ludo engine.
//!
//! Lets a Python front end (for example a Tk board) drive the engine while
//! all rules stay in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import ludo_engine as ludo
//!
//! game = ludo.LudoGame(seed=42)
//! roll = game.roll_dice()
//! if roll.legal_moves:
//!     outcome = game.apply_move(roll.legal_moves[0])
//! print("\n".join(game.log()))
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// ludo_engine: a four-player Ludo rules engine.
#[pymodule]
fn ludo_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLudoGame>()?;
    m.add_class::<PyRollOutcome>()?;
    m.add_class::<PyMoveOutcome>()?;

    Ok(())
}
