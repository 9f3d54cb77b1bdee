//! Simulation core - grid state, stepping, selection, and clipboard.

mod clipboard;
mod grid;
mod neighbors;
mod selection;
mod simulation;
mod stepper;

pub use clipboard::*;
pub use grid::*;
pub use neighbors::*;
pub use selection::*;
pub use simulation::*;
pub use stepper::*;
