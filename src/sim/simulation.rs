//! Explicit simulation context.
//!
//! Owns the grid, stepper, and clipboard as one constructed object, so
//! whatever scheduler or UI adapter drives the simulation holds a
//! reference to this instead of a page-lifetime global. All mutation
//! runs to completion inside a single logical thread of control; an
//! external tick source calls [`tick`](Simulation::tick) between input
//! events.

use log::{debug, info};

use crate::schema::{ConfigError, GridConfig, Seed};

use super::{
    CellularGrid, ClipboardBuffer, ClipboardError, ClipboardSnapshot, GenerationStepper,
    PasteReport, StepDelta,
};

/// Point-in-time simulation statistics for monitoring.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SimStats {
    pub generation: u64,
    pub population: usize,
    pub density: f64,
}

impl SimStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &CellularGrid) -> Self {
        let population = grid.population();
        Self {
            generation: grid.generation(),
            population,
            density: population as f64 / (grid.rows() * grid.cols()) as f64,
        }
    }
}

/// A grid plus everything needed to drive it.
pub struct Simulation {
    config: GridConfig,
    grid: CellularGrid,
    stepper: GenerationStepper,
    clipboard: ClipboardBuffer,
    restart_point: Option<Vec<Vec<bool>>>,
}

impl Simulation {
    /// Create with an all-dead grid.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "creating simulation: {}x{} grid",
            config.rows, config.cols
        );
        let grid = CellularGrid::new(config.rows, config.cols);
        Ok(Self {
            config,
            grid,
            stepper: GenerationStepper::new(),
            clipboard: ClipboardBuffer::new(),
            restart_point: None,
        })
    }

    /// Create and apply a seed pattern.
    pub fn from_seed(config: GridConfig, seed: &Seed) -> Result<Self, ConfigError> {
        let mut simulation = Self::new(config)?;
        let values = seed.generate(simulation.grid.rows(), simulation.grid.cols());
        simulation.grid.set_values(&values);
        Ok(simulation)
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &CellularGrid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut CellularGrid {
        &mut self.grid
    }

    /// Advance one generation (compute then commit).
    pub fn tick(&mut self) -> StepDelta {
        let delta = self.stepper.step(&mut self.grid);
        debug!(
            "generation {}: {} births, {} deaths",
            self.grid.generation(),
            delta.births,
            delta.deaths
        );
        delta
    }

    /// Advance a fixed number of generations.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.tick();
        }
    }

    /// Copy the current selection into the clipboard.
    pub fn copy_selection(&mut self) -> Result<&ClipboardSnapshot, ClipboardError> {
        self.clipboard.copy(&self.grid)
    }

    /// Paste the clipboard with its top-left corner at `anchor`.
    pub fn paste_at(&mut self, anchor: (usize, usize)) -> Result<PasteReport, ClipboardError> {
        self.clipboard.paste(&mut self.grid, anchor)
    }

    /// Remember the current grid so [`restart`](Simulation::restart)
    /// can return to it; taken when a run is started.
    pub fn mark_restart_point(&mut self) {
        self.restart_point = Some(self.grid.values());
    }

    /// Restore the last marked configuration.
    ///
    /// A no-op when no restart point was ever marked.
    pub fn restart(&mut self) {
        if let Some(values) = self.restart_point.clone() {
            self.grid.set_values(&values);
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Refill the grid with a uniform 50/50 draw.
    pub fn randomize(&mut self) {
        self.grid.randomize();
    }

    /// Current statistics.
    pub fn stats(&self) -> SimStats {
        SimStats::from_grid(&self.grid)
    }
}
