//! Copy/paste of live-cell patterns.
//!
//! Copy extracts the minimal bounding rectangle of the selected cells
//! into a snapshot with no ties to live cell storage; paste writes it
//! back anywhere, wrapping toroidally, through the grid's
//! incremental-update primitive so neighbor counts never desynchronize.

use super::CellularGrid;

/// A rectangular block of live/dead values, row-major.
///
/// No cell identity is retained; a snapshot is just dimensions plus
/// booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl ClipboardSnapshot {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at a position inside the snapshot.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }
}

/// Cells actually changed by a paste.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasteReport {
    pub cells_written: usize,
    pub cells_changed: usize,
}

/// Clipboard preconditions surfaced to the caller.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("No cells are selected to copy")]
    NoSelection,
    #[error("Nothing to paste; copy a selection first")]
    NothingToPaste,
}

/// Single-slot clipboard over grid selections.
#[derive(Default)]
pub struct ClipboardBuffer {
    snapshot: Option<ClipboardSnapshot>,
}

impl ClipboardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently held snapshot, if any.
    pub fn snapshot(&self) -> Option<&ClipboardSnapshot> {
        self.snapshot.as_ref()
    }

    /// Copy the selected cells' states into the clipboard.
    ///
    /// The snapshot spans the minimal row/col bounding rectangle of the
    /// selection; unselected cells inside that rectangle are copied
    /// too, as part of the block. With nothing selected the previous
    /// snapshot is kept and `NoSelection` is reported.
    pub fn copy(&mut self, grid: &CellularGrid) -> Result<&ClipboardSnapshot, ClipboardError> {
        let selected = grid.selected_cells();
        if selected.is_empty() {
            return Err(ClipboardError::NoSelection);
        }

        let mut min_row = usize::MAX;
        let mut max_row = 0;
        let mut min_col = usize::MAX;
        let mut max_col = 0;
        for &(row, col) in &selected {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }

        let rows = max_row - min_row + 1;
        let cols = max_col - min_col + 1;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                cells.push(grid.is_alive(row, col));
            }
        }

        Ok(self.snapshot.insert(ClipboardSnapshot { rows, cols, cells }))
    }

    /// Paste the held snapshot with its top-left corner at `anchor`.
    ///
    /// Writes wrap toroidally, so an anchor near the far edge spills
    /// onto the opposite edge. Requires a prior successful copy;
    /// otherwise `NothingToPaste` and the grid is untouched.
    pub fn paste(
        &self,
        grid: &mut CellularGrid,
        anchor: (usize, usize),
    ) -> Result<PasteReport, ClipboardError> {
        let snapshot = self.snapshot.as_ref().ok_or(ClipboardError::NothingToPaste)?;

        let mut report = PasteReport::default();
        for row in 0..snapshot.rows {
            for col in 0..snapshot.cols {
                let target_row = (anchor.0 + row) % grid.rows();
                let target_col = (anchor.1 + col) % grid.cols();
                if grid.set_cell_state(target_row, target_col, snapshot.get(row, col)) {
                    report.cells_changed += 1;
                }
                report.cells_written += 1;
            }
        }
        Ok(report)
    }
}
