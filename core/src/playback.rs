//! Playback of a solved path onto the grid.
//!
//! The engine holds no timer and does no I/O: an external scheduler
//! calls [`PlaybackSession::advance`] at its own pace (a fixed delay
//! of [`DEFAULT_STEP_INTERVAL_MS`] is the usual choice) and stops once
//! [`StepOutcome::Done`] comes back.

use log::debug;

use crate::error::Result;
use crate::types::Coord2;
use crate::Grid;

/// Suggested delay between advances for the external timer driving a
/// stepped playback, in milliseconds.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 300;

/// Outcome of one playback advance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Progressed,
    Done,
}

impl StepOutcome {
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Marks every path coordinate at once, in path order.
pub fn reveal_all(grid: &mut Grid, path: &[Coord2]) -> Result<()> {
    let mut session = start_stepped(grid, path)?;
    while !session.advance().is_done() {}
    Ok(())
}

/// Starts a stepped playback over `path`. The whole path is bounds
/// checked up front so that `advance` itself cannot fail.
pub fn start_stepped<'g, 'p>(grid: &'g mut Grid, path: &'p [Coord2]) -> Result<PlaybackSession<'g, 'p>> {
    for &coords in path {
        grid.validate_coords(coords)?;
    }
    debug!("playback session over {} path cells", path.len());
    Ok(PlaybackSession {
        grid,
        path: path.iter(),
    })
}

/// Single-pass cursor over a solved path.
///
/// The session borrows the grid for its whole lifetime, so manual
/// edits cannot interleave with a running playback. Dropping the
/// session cancels it; marks already applied stay on the grid. There
/// is no pause: re-running a solution is `clear_marks` plus a fresh
/// session.
#[derive(Debug)]
pub struct PlaybackSession<'g, 'p> {
    grid: &'g mut Grid,
    path: core::slice::Iter<'p, Coord2>,
}

impl PlaybackSession<'_, '_> {
    /// Marks the next path cell, or reports completion once the path
    /// is exhausted. A completed session stays completed; further
    /// advances never touch the grid.
    pub fn advance(&mut self) -> StepOutcome {
        match self.path.next() {
            Some(&coords) => {
                self.grid.set_mark(coords);
                StepOutcome::Progressed
            }
            None => StepOutcome::Done,
        }
    }

    /// Path cells not yet marked by this session.
    pub fn remaining(&self) -> usize {
        self.path.len()
    }
}
