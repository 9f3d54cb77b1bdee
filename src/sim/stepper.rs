//! Two-phase generation stepping.
//!
//! Every cell's birth/death decision must be taken against a single
//! frozen snapshot of neighbor counts. The stepper therefore splits a
//! round into a read-only decision pass and a commit pass that routes
//! each change through the grid's incremental-update primitive.

use rayon::prelude::*;

use super::CellularGrid;

/// Apply the fixed (2, 3, 3) birth/death thresholds to one cell.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    if alive {
        // Underpopulation below 2, overpopulation above 3.
        (2..=3).contains(&live_neighbors)
    } else {
        // Birth at exactly 3.
        live_neighbors == 3
    }
}

/// Outcome of one committed generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepDelta {
    /// Cells that went dead -> alive this generation.
    pub births: usize,
    /// Cells that went alive -> dead this generation.
    pub deaths: usize,
}

/// Drives the compute/commit cycle over a grid.
///
/// Holds a reusable decision buffer so stepping allocates nothing after
/// the first round.
#[derive(Default)]
pub struct GenerationStepper {
    decisions: Vec<bool>,
}

impl GenerationStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase one: decide every cell's next state from current counts.
    ///
    /// Reads `alive` and `live_neighbors` only; neither is mutated here,
    /// so the order cells are visited in cannot affect the result. The
    /// decisions land in each cell's pending slot.
    pub fn compute_next(&mut self, grid: &mut CellularGrid) {
        grid.cells()
            .par_iter()
            .map(|cell| next_state(cell.alive, cell.live_neighbors))
            .collect_into_vec(&mut self.decisions);

        for (cell, &next) in grid.cells_mut().iter_mut().zip(&self.decisions) {
            cell.pending = Some(next);
        }
    }

    /// Phase two: apply every pending decision and bump the generation.
    ///
    /// Each change goes through `set_cell_state`, restoring the
    /// neighbor-count invariant cell by cell; commit order is irrelevant
    /// because all decisions were frozen in phase one. A cell with no
    /// pending decision (commit called without a preceding compute) is
    /// left untouched.
    pub fn commit(&mut self, grid: &mut CellularGrid) -> StepDelta {
        let mut delta = StepDelta::default();

        for index in 0..grid.cells().len() {
            let Some(next) = grid.cells_mut()[index].pending.take() else {
                continue;
            };
            let (row, col) = grid.position_of(index);
            if grid.set_cell_state(row, col, next) {
                if next {
                    delta.births += 1;
                } else {
                    delta.deaths += 1;
                }
            }
        }

        grid.advance_generation();
        delta
    }

    /// One full generation: compute then commit.
    pub fn step(&mut self, grid: &mut CellularGrid) -> StepDelta {
        self.compute_next(grid);
        self.commit(grid)
    }
}
