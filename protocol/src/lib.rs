//! Types exchanged with the external constraint solver.
//!
//! The solver itself is a black box: it takes a [`PuzzleDefinition`]
//! and answers with a [`SolverResult`] or a failure. Implementations
//! of [`Solver`] wrap whatever backend actually does the solving;
//! callers are expected to run `solve` off the interactive thread and
//! keep at most one invocation in flight.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rogo_core::{Coord, Coord2, Grid, StepCount, Wire};

/// Errors at the solver boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("step budget {0} is odd; a closed path needs an even budget")]
    OddStepBudget(StepCount),
    #[error("path point {index} is outside the 1-based board coordinates")]
    BadPathPoint { index: usize },
    #[error("solver backend unavailable: {0}")]
    Unavailable(String),
    #[error("puzzle has no solution under the given budget")]
    Infeasible,
}

/// The unit of work handed to the solver: dimensions, step budget, and
/// the wire-format board. Derived from a [`Grid`], never edited on its
/// own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub rows: Coord,
    pub columns: Coord,
    pub max_steps: StepCount,
    pub board: Vec<Vec<Wire>>,
}

impl PuzzleDefinition {
    /// Assembles a definition from a grid and a step budget.
    ///
    /// An odd budget is rejected here, before any solver call: the
    /// solved path is closed, so it crosses an even number of cell
    /// boundaries.
    pub fn from_grid(grid: &Grid, max_steps: StepCount) -> Result<Self, SolveError> {
        if max_steps % 2 != 0 {
            return Err(SolveError::OddStepBudget(max_steps));
        }

        let board = grid
            .to_wire()
            .outer_iter()
            .map(|row| row.to_vec())
            .collect();

        Ok(Self {
            rows: grid.rows(),
            columns: grid.columns(),
            max_steps,
            board,
        })
    }
}

/// One visited cell in the solver's answer, 1-based as on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPoint {
    pub row: u16,
    pub col: u16,
}

/// A successful solver answer: the visited path in order, the score,
/// and whatever diagnostics the backend reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    pub path: Vec<PathPoint>,
    pub score: i64,
    /// Opaque backend diagnostics (timings, node counts), passed
    /// through untouched.
    #[serde(default)]
    pub stats: serde_json::Value,
}

impl SolverResult {
    /// Converts the 1-based wire path into the 0-based grid
    /// coordinates playback consumes.
    pub fn grid_path(&self) -> Result<Vec<Coord2>, SolveError> {
        self.path
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let row = checked_coord(point.row);
                let col = checked_coord(point.col);
                match (row, col) {
                    (Some(row), Some(col)) => Ok((row, col)),
                    _ => Err(SolveError::BadPathPoint { index }),
                }
            })
            .collect()
    }
}

fn checked_coord(wire: u16) -> Option<Coord> {
    wire.checked_sub(1)?.try_into().ok()
}

/// External constraint solver seam.
pub trait Solver {
    fn solve(&self, definition: &PuzzleDefinition) -> Result<SolverResult, SolveError>;
}
