//! Cell storage and incremental neighbor-count maintenance.
//!
//! The grid owns all cell state in a flat array; neighbor relationships
//! live in a [`NeighborIndex`] of flat indices, so there are no cyclic
//! references anywhere in the model.

use rand::Rng;

use super::NeighborIndex;

/// A single cell.
///
/// `live_neighbors` is a cache of how many of the cell's 8 toroidal
/// neighbors are currently alive; it is adjusted incrementally on every
/// state flip rather than recomputed. `pending` is only populated
/// between the compute and commit phases of a stepping round.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub(crate) alive: bool,
    pub(crate) pending: Option<bool>,
    pub(crate) live_neighbors: u8,
    pub(crate) selected: bool,
}

impl Cell {
    /// Current state.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Cached live-neighbor count (0..=8).
    #[inline]
    pub fn live_neighbors(&self) -> u8 {
        self.live_neighbors
    }

    /// Whether the cell is part of the current selection.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// State-change notification for the rendering collaborator.
///
/// Queued whenever `set_cell_state` actually changes a cell while
/// event recording is enabled; drained by whatever adapter draws the
/// grid. Recording is off by default so headless runs accumulate
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEvent {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

/// A rows x cols toroidal grid of cells.
///
/// Dimensions are fixed at construction. All mutation goes through
/// [`set_cell_state`](CellularGrid::set_cell_state), which keeps every
/// neighbor count consistent in O(8) per flip.
pub struct CellularGrid {
    cells: Vec<Cell>,
    neighbors: NeighborIndex,
    generation: u64,
    record_events: bool,
    events: Vec<CellEvent>,
}

impl CellularGrid {
    /// Create an empty (all-dead) grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below 3 (the neighbor table
    /// rejects degenerate tori); validate configuration before
    /// constructing.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); rows * cols],
            neighbors: NeighborIndex::new(rows, cols),
            generation: 0,
            record_events: false,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.neighbors.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.neighbors.cols()
    }

    /// Completed generations since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert (row, col) to flat index.
    #[inline]
    fn flat(&self, row: usize, col: usize) -> usize {
        self.neighbors.flat(row, col)
    }

    /// Convert flat index to (row, col).
    #[inline]
    fn pos(&self, index: usize) -> (usize, usize) {
        (index / self.cols(), index % self.cols())
    }

    /// Cell accessor.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.flat(row, col)]
    }

    /// Current state of a cell.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).alive
    }

    /// Cached live-neighbor count of a cell.
    #[inline]
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.cell(row, col).live_neighbors
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Set a cell's state, maintaining neighbor counts incrementally.
    ///
    /// A no-op (returning `false`) when the state is unchanged.
    /// Otherwise flips the cell, adjusts the live-neighbor count of each
    /// of its 8 toroidal neighbors by +-1, queues a [`CellEvent`] for
    /// the renderer when recording is enabled, and returns `true`. The
    /// cell's own count is never touched by its own flip.
    pub fn set_cell_state(&mut self, row: usize, col: usize, alive: bool) -> bool {
        let index = self.flat(row, col);
        if self.cells[index].alive == alive {
            return false;
        }
        self.cells[index].alive = alive;

        for neighbor in self.neighbors.neighbors_of(index) {
            if alive {
                self.cells[neighbor].live_neighbors += 1;
            } else {
                self.cells[neighbor].live_neighbors -= 1;
            }
        }

        if self.record_events {
            self.events.push(CellEvent { row, col, alive });
        }
        true
    }

    /// Flip a cell's state (click-select).
    pub fn toggle(&mut self, row: usize, col: usize) {
        let alive = self.is_alive(row, col);
        self.set_cell_state(row, col, !alive);
    }

    /// Turn renderer event recording on or off.
    ///
    /// Off by default; a drawing adapter enables it and then drains
    /// after each batch of mutations. Disabling discards anything
    /// still queued.
    pub fn set_event_recording(&mut self, enabled: bool) {
        self.record_events = enabled;
        if !enabled {
            self.events.clear();
        }
    }

    /// Whether state changes are currently queued for the renderer.
    pub fn is_recording_events(&self) -> bool {
        self.record_events
    }

    /// Take the queued state-change events for the renderer.
    pub fn drain_events(&mut self) -> Vec<CellEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot the whole grid as row-major live/dead values.
    pub fn values(&self) -> Vec<Vec<bool>> {
        (0..self.rows())
            .map(|row| (0..self.cols()).map(|col| self.is_alive(row, col)).collect())
            .collect()
    }

    /// Overwrite the whole grid from row-major values.
    ///
    /// Rows or cells missing from `values` (short rows, short outer
    /// vector) are treated as dead, so a truncated persisted record
    /// loads best-effort instead of failing.
    pub fn set_values(&mut self, values: &[Vec<bool>]) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let alive = values
                    .get(row)
                    .and_then(|r| r.get(col))
                    .copied()
                    .unwrap_or(false);
                self.set_cell_state(row, col, alive);
            }
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                self.set_cell_state(row, col, false);
            }
        }
    }

    /// Fill with a uniform 50/50 draw per cell.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Fill with a uniform 50/50 draw from a caller-supplied generator.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let alive = rng.gen_bool(0.5);
                self.set_cell_state(row, col, alive);
            }
        }
    }

    /// Mark or unmark a cell as selected.
    pub fn set_selected(&mut self, row: usize, col: usize, selected: bool) {
        let index = self.flat(row, col);
        self.cells[index].selected = selected;
    }

    /// Drop the current selection entirely.
    pub fn clear_selection(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
    }

    /// Coordinates of all selected cells, row-major.
    pub fn selected_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.selected)
            .map(|(index, _)| self.pos(index))
            .collect()
    }

    /// Raw cell slice for the stepping passes.
    #[inline]
    pub(super) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable raw cell slice for the stepping passes.
    #[inline]
    pub(super) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Flat index to (row, col), for the stepping passes.
    #[inline]
    pub(super) fn position_of(&self, index: usize) -> (usize, usize) {
        self.pos(index)
    }

    /// Mark one generation as completed.
    pub(super) fn advance_generation(&mut self) {
        self.generation += 1;
    }
}
