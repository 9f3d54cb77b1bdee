//! Configuration types for grid geometry and layout.

use serde::{Deserialize, Serialize};

/// Default on-screen cell size in pixels.
fn default_cell_size() -> u32 {
    25
}

/// Top-level grid configuration.
///
/// Dimensions are fixed for the lifetime of a grid; there is no
/// resize-in-place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// On-screen cell size in pixels, used when computing cached
    /// selectable bounding boxes.
    #[serde(default = "default_cell_size")]
    pub cell_size_px: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 24,
            cols: 32,
            cell_size_px: 25,
        }
    }
}

impl GridConfig {
    /// Get total cell count (rows * cols).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate configuration parameters.
    ///
    /// Dimensions below 3 are rejected: on a 1- or 2-wide torus the
    /// wrapped Moore neighborhood folds onto the cell itself, so no
    /// neighbor table can keep a cell's own flip out of its own count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.cell_size_px == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be at least 3")]
    InvalidDimensions,
    #[error("Cell size must be non-zero")]
    InvalidCellSize,
}
