#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use codec::*;
pub use error::*;
pub use playback::*;
pub use types::*;

mod cell;
mod codec;
mod error;
mod playback;
mod types;

/// Authoritative puzzle state: cell content plus the presentational
/// playback marks. Marks are never persisted; serialization keeps the
/// cells only and a deserialized grid comes back unmarked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "GridCells", into = "GridCells")]
pub struct Grid {
    cells: Array2<CellMode>,
    marks: Array2<bool>,
}

#[derive(Serialize, Deserialize)]
struct GridCells {
    cells: Array2<CellMode>,
}

impl From<GridCells> for Grid {
    fn from(repr: GridCells) -> Self {
        Self::from_cells(repr.cells)
    }
}

impl From<Grid> for GridCells {
    fn from(grid: Grid) -> Self {
        Self { cells: grid.cells }
    }
}

impl Grid {
    /// Creates an all-empty grid. Each dimension is clamped to at
    /// least one cell.
    pub fn empty((rows, columns): Coord2) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let columns = columns.clamp(1, Coord::MAX);
        Self::from_cells(Array2::from_elem(
            [rows as usize, columns as usize],
            CellMode::Empty,
        ))
    }

    fn from_cells(cells: Array2<CellMode>) -> Self {
        let marks = Array2::from_elem(cells.raw_dim(), false);
        Self { cells, marks }
    }

    /// Builds a grid from wire-encoded rows, rejecting jagged input
    /// and any value below `-2`. Every offending position is reported.
    pub fn from_wire_rows(rows: &[Vec<Wire>]) -> Result<Self> {
        let (height, width) = rectangular_dims(rows)?;
        let mut cells = Array2::from_elem([height, width], CellMode::Empty);
        let mut bad: Vec<Coord2> = Vec::new();

        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                match CellMode::from_wire(value) {
                    Some(mode) => cells[[r, c]] = mode,
                    None => bad.push((r as Coord, c as Coord)),
                }
            }
        }

        if !bad.is_empty() {
            return Err(ValidationError::BadCellValues { positions: bad }.into());
        }
        Ok(Self::from_cells(cells))
    }

    /// Builds a grid from manually typed entries, as collected from a
    /// board of text inputs. Blank entries default to empty cells;
    /// unreadable entries are reported with their positions so the
    /// caller can highlight them.
    pub fn from_entries<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let (height, width) = rectangular_dims(rows)?;
        let mut cells = Array2::from_elem([height, width], CellMode::Empty);
        let mut bad: Vec<Coord2> = Vec::new();

        for (r, row) in rows.iter().enumerate() {
            for (c, entry) in row.iter().enumerate() {
                match CellMode::from_entry(entry.as_ref()) {
                    Some(mode) => cells[[r, c]] = mode,
                    None => bad.push((r as Coord, c as Coord)),
                }
            }
        }

        if !bad.is_empty() {
            return Err(ValidationError::BadEntries { positions: bad }.into());
        }
        Ok(Self::from_cells(cells))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(PuzzleError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellMode {
        self.cells[coords.to_nd_index()]
    }

    pub fn is_marked(&self, coords: Coord2) -> bool {
        self.marks[coords.to_nd_index()]
    }

    /// Projects the grid to its wire-format integer view, the board
    /// handed to the codec and the solver.
    pub fn to_wire(&self) -> Array2<Wire> {
        self.cells.map(|mode| mode.to_wire())
    }

    /// Advances a non-clue cell one step through the manual-edit
    /// cycle. Clue values only change by whole-grid replacement.
    pub fn cycle_cell(&mut self, coords: Coord2) -> Result<CycleOutcome> {
        let coords = self.validate_coords(coords)?;
        let mode = self.cells[coords.to_nd_index()];

        if mode.is_clue() {
            return Ok(CycleOutcome::NoChange);
        }
        self.cells[coords.to_nd_index()] = mode.cycled();
        Ok(CycleOutcome::Cycled)
    }

    /// Sets the playback mark on a cell.
    pub fn apply_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        Ok(if self.marks[coords.to_nd_index()] {
            MarkOutcome::NoChange
        } else {
            self.marks[coords.to_nd_index()] = true;
            MarkOutcome::Marked
        })
    }

    /// Clears every playback mark. Idempotent.
    pub fn clear_marks(&mut self) {
        self.marks.fill(false);
    }

    pub(crate) fn set_mark(&mut self, coords: Coord2) {
        self.marks[coords.to_nd_index()] = true;
    }

    pub fn marked_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.marks
            .indexed_iter()
            .filter(|&(_, &marked)| marked)
            .map(|(idx, _)| (idx.0 as Coord, idx.1 as Coord))
    }
}

impl Index<Coord2> for Grid {
    type Output = CellMode;

    fn index(&self, (row, column): Coord2) -> &Self::Output {
        &self.cells[(row as usize, column as usize)]
    }
}

fn rectangular_dims<T>(rows: &[Vec<T>]) -> Result<(usize, usize)> {
    let Some(first) = rows.first() else {
        return Err(ValidationError::EmptyBoard.into());
    };
    let width = first.len();
    if width == 0 {
        return Err(ValidationError::EmptyBoard.into());
    }

    for (r, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ValidationError::NonRectangular {
                row: r,
                got: row.len(),
                expected: width,
            }
            .into());
        }
    }

    if rows.len() > Coord::MAX as usize {
        return Err(ValidationError::ValueOutOfRange(rows.len() as i64).into());
    }
    if width > Coord::MAX as usize {
        return Err(ValidationError::ValueOutOfRange(width as i64).into());
    }
    Ok((rows.len(), width))
}

/// Outcome of a manual cell edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    NoChange,
    Cycled,
}

impl CycleOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Cycled => true,
        }
    }
}

/// Outcome of applying one playback mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Marked,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Marked => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn empty_grid_clamps_dimensions() {
        let grid = Grid::empty((0, 3));
        assert_eq!(grid.size(), (1, 3));
        assert_eq!(grid.cell_at((0, 2)), CellMode::Empty);
    }

    #[test]
    fn wire_rows_reject_jagged_input() {
        let err = Grid::from_wire_rows(&[vec![0, 1], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Validation(ValidationError::NonRectangular {
                row: 1,
                got: 1,
                expected: 2,
            })
        );
    }

    #[test]
    fn wire_rows_report_every_bad_value() {
        let err = Grid::from_wire_rows(&[vec![0, -3], vec![-5, 2]]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Validation(ValidationError::BadCellValues {
                positions: vec![(0, 1), (1, 0)],
            })
        );
    }

    #[test]
    fn entries_default_blank_to_empty_and_flag_garbage() {
        let grid = Grid::from_entries(&[vec!["", "3"], vec!["-1", " "]]).unwrap();
        assert_eq!(grid.cell_at((0, 0)), CellMode::Empty);
        assert_eq!(grid.cell_at((0, 1)), CellMode::Clue(3));
        assert_eq!(grid.cell_at((1, 0)), CellMode::Path);
        assert_eq!(grid.cell_at((1, 1)), CellMode::Empty);

        let err = Grid::from_entries(&[vec!["ok", ""], vec!["2", "-9"]]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Validation(ValidationError::BadEntries {
                positions: vec![(0, 0), (1, 1)],
            })
        );
    }

    #[test]
    fn cycling_three_times_returns_to_start() {
        let mut grid = Grid::from_wire_rows(&[vec![0, -1], vec![-2, 3]]).unwrap();

        for coords in [(0, 0), (0, 1), (1, 0)] {
            let before = grid.cell_at(coords);
            for _ in 0..3 {
                assert_eq!(grid.cycle_cell(coords).unwrap(), CycleOutcome::Cycled);
            }
            assert_eq!(grid.cell_at(coords), before);
        }
    }

    #[test]
    fn clue_cells_ignore_cycling() {
        let mut grid = Grid::from_wire_rows(&[vec![5]]).unwrap();
        for _ in 0..4 {
            assert_eq!(grid.cycle_cell((0, 0)).unwrap(), CycleOutcome::NoChange);
        }
        assert_eq!(grid.cell_at((0, 0)), CellMode::Clue(5));
    }

    #[test]
    fn cycle_out_of_bounds_is_rejected() {
        let mut grid = Grid::empty((2, 2));
        assert_eq!(grid.cycle_cell((2, 0)), Err(PuzzleError::InvalidCoords));
    }

    #[test]
    fn marks_are_idempotent() {
        let mut grid = Grid::empty((2, 2));

        assert_eq!(grid.apply_mark((1, 1)).unwrap(), MarkOutcome::Marked);
        assert_eq!(grid.apply_mark((1, 1)).unwrap(), MarkOutcome::NoChange);
        assert!(grid.is_marked((1, 1)));

        grid.clear_marks();
        grid.clear_marks();
        assert!(!grid.is_marked((1, 1)));
        assert_eq!(grid.marked_cells().count(), 0);
    }

    #[test]
    fn wire_projection_matches_source_rows() {
        let rows = vec![vec![0, -1], vec![-2, 3]];
        let grid = Grid::from_wire_rows(&rows).unwrap();
        let wire = grid.to_wire();

        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert_eq!(wire[[r, c]], value);
            }
        }
    }

    #[test]
    fn serde_round_trip_drops_marks() {
        let mut grid = Grid::from_wire_rows(&[vec![0, -1], vec![-2, 3]]).unwrap();
        grid.apply_mark((0, 0)).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.cell_at((1, 1)), CellMode::Clue(3));
        assert_eq!(restored.size(), grid.size());
        assert_eq!(restored.marked_cells().collect::<Vec<_>>(), Vec::new());
    }
}
