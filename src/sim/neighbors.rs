//! Toroidal Moore-neighborhood index.
//!
//! Precomputes, once per grid construction, the 8 wrapped neighbor
//! indices of every cell, so state flips can adjust neighbor counts
//! without recomputing coordinates.

/// Precomputed neighbor table over a rows x cols toroidal grid.
///
/// Cells are addressed by flat index `row * cols + col`. The table is
/// immutable for the lifetime of the grid it was built for.
pub struct NeighborIndex {
    rows: usize,
    cols: usize,
    table: Vec<[usize; 8]>,
}

impl NeighborIndex {
    /// Build the table for a rows x cols grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below 3: with fewer cells per
    /// axis the wrapped neighborhood folds onto the cell itself and a
    /// cell's own flip would corrupt its own count.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 3 && cols >= 3,
            "toroidal neighborhoods need at least 3 cells per axis"
        );
        let mut table = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                let mut entry = [0usize; 8];
                let mut i = 0;
                for dr in [rows - 1, 0, 1] {
                    for dc in [cols - 1, 0, 1] {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        // Offsets are pre-shifted by +rows/+cols so the
                        // wrap is a single modulo on unsigned values.
                        let r = (row + dr) % rows;
                        let c = (col + dc) % cols;
                        entry[i] = r * cols + c;
                        i += 1;
                    }
                }
                table.push(entry);
            }
        }

        Self { rows, cols, table }
    }

    /// Flat indices of the 8 neighbors of the cell at `index`.
    #[inline]
    pub fn neighbors_of(&self, index: usize) -> [usize; 8] {
        self.table[index]
    }

    /// Convert (row, col) to flat index.
    #[inline]
    pub fn flat(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
}
