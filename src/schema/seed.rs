//! Seed types for initializing Life grids.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Glider { origin: (1, 1) },
        }
    }
}

/// Predefined patterns for initialization.
///
/// Placement wraps toroidally, so an origin near the far edge spills
/// onto the opposite edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// The standard 5-cell glider.
    Glider {
        /// Top-left corner of the pattern as (row, col).
        origin: (usize, usize),
    },
    /// Period-2 blinker (3 cells in a row).
    Blinker {
        /// Top-left corner of the pattern as (row, col).
        origin: (usize, usize),
    },
    /// Still-life 2x2 block.
    Block {
        /// Top-left corner of the pattern as (row, col).
        origin: (usize, usize),
    },
    /// Uniform random fill.
    Random {
        /// Probability a cell starts alive (0.0-1.0).
        density: f64,
        /// Random seed.
        seed: u64,
    },
    /// Explicit live-cell list.
    Cells {
        /// List of (row, col) entries.
        cells: Vec<(usize, usize)>,
    },
}

/// Relative live-cell offsets for the standard glider.
const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Relative live-cell offsets for the blinker.
const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];

/// Relative live-cell offsets for the block.
const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

impl Seed {
    /// Generate an initial grid of live/dead values.
    pub fn generate(&self, rows: usize, cols: usize) -> Vec<Vec<bool>> {
        let mut grid = vec![vec![false; cols]; rows];

        match &self.pattern {
            Pattern::Glider { origin } => place_offsets(&mut grid, *origin, GLIDER),
            Pattern::Blinker { origin } => place_offsets(&mut grid, *origin, BLINKER),
            Pattern::Block { origin } => place_offsets(&mut grid, *origin, BLOCK),
            Pattern::Random { density, seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                for row in &mut grid {
                    for cell in row.iter_mut() {
                        *cell = rng.gen_bool(density.clamp(0.0, 1.0));
                    }
                }
            }
            Pattern::Cells { cells } => {
                for &(r, c) in cells {
                    grid[r % rows][c % cols] = true;
                }
            }
        }

        grid
    }
}

fn place_offsets(grid: &mut [Vec<bool>], origin: (usize, usize), offsets: &[(usize, usize)]) {
    let rows = grid.len();
    let cols = grid[0].len();
    for &(dr, dc) in offsets {
        grid[(origin.0 + dr) % rows][(origin.1 + dc) % cols] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_count(grid: &[Vec<bool>]) -> usize {
        grid.iter().flatten().filter(|&&c| c).count()
    }

    #[test]
    fn test_glider_has_five_cells() {
        let seed = Seed {
            pattern: Pattern::Glider { origin: (2, 3) },
        };
        let grid = seed.generate(10, 10);
        assert_eq!(live_count(&grid), 5);
        assert!(grid[2][4]);
        assert!(grid[4][3] && grid[4][4] && grid[4][5]);
    }

    #[test]
    fn test_pattern_wraps_at_edge() {
        let seed = Seed {
            pattern: Pattern::Block { origin: (9, 9) },
        };
        let grid = seed.generate(10, 10);
        assert!(grid[9][9] && grid[9][0] && grid[0][9] && grid[0][0]);
    }

    #[test]
    fn test_random_is_deterministic() {
        let seed = Seed {
            pattern: Pattern::Random {
                density: 0.5,
                seed: 42,
            },
        };
        assert_eq!(seed.generate(16, 16), seed.generate(16, 16));
    }

    #[test]
    fn test_random_density_extremes() {
        let empty = Seed {
            pattern: Pattern::Random {
                density: 0.0,
                seed: 1,
            },
        };
        let full = Seed {
            pattern: Pattern::Random {
                density: 1.0,
                seed: 1,
            },
        };
        assert_eq!(live_count(&empty.generate(8, 8)), 0);
        assert_eq!(live_count(&full.generate(8, 8)), 64);
    }

    #[test]
    fn test_seed_json_round_trip() {
        let seed = Seed {
            pattern: Pattern::Cells {
                cells: vec![(0, 0), (3, 7)],
            },
        };
        let json = serde_json::to_string(&seed).unwrap();
        let parsed: Seed = serde_json::from_str(&json).unwrap();
        let grid = parsed.generate(8, 8);
        assert!(grid[0][0] && grid[3][7]);
        assert_eq!(live_count(&grid), 2);
    }
}
