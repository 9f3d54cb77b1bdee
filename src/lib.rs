//! Interactive Game of Life on a toroidal grid.
//!
//! Neighbor counts are maintained incrementally: every state flip
//! adjusts the cached live-neighbor count of its 8 wrapped neighbors in
//! O(8), so manual edits and selective pastes never trigger a full
//! rescan. Generations step through a two-phase compute/commit cycle
//! so every birth/death decision reads a single frozen snapshot.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Grid configuration and seed patterns
//! - `sim`: The simulation core (grid, stepper, selection, clipboard)
//! - `storage`: JSON-file-backed store of named grid snapshots
//!
//! # Example
//!
//! ```rust
//! use torus_life::{
//!     schema::{GridConfig, Pattern, Seed},
//!     sim::Simulation,
//! };
//!
//! let config = GridConfig {
//!     rows: 10,
//!     cols: 10,
//!     cell_size_px: 25,
//! };
//! let seed = Seed {
//!     pattern: Pattern::Glider { origin: (1, 1) },
//! };
//!
//! let mut simulation = Simulation::from_seed(config, &seed).unwrap();
//! simulation.run(4);
//!
//! // A glider survives intact, translated one row and one column.
//! assert_eq!(simulation.stats().population, 5);
//! ```

pub mod schema;
pub mod sim;
pub mod storage;

// Re-export commonly used types
pub use schema::{GridConfig, Pattern, Seed};
pub use sim::{CellularGrid, ClipboardBuffer, GenerationStepper, RegionSelector, Simulation};
pub use storage::GridStore;
