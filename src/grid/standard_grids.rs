//! A set of pre-made grids covering each kind of maze verdict

use crate::grid::Grid;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Named, hand-drawn [`Grid`]s
///
/// ```
/// use perfect_maze::grid::standard_grids::StandardGrid;
/// use perfect_maze::is_perfect_maze;
///
/// for grid in StandardGrid::get_all() {
///     assert_eq!(is_perfect_maze(&grid.get_grid()), grid.is_perfect());
/// }
/// ```
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardGrid {
    /// Nothing but walls
    Solid,
    /// A single path cell surrounded by walls
    Single,
    /// A straight 1x5 corridor
    Corridor,
    /// Three path cells in an L
    Corner,
    /// A top corridor with three teeth hanging off it
    #[default]
    Comb,
    /// One winding path from the top left to the middle
    Spiral,
    /// A loop around a single wall
    Ring,
    /// A fully open 2x2 block
    Open,
    /// Two corridors separated by a wall
    Islands,
}

impl StandardGrid {
    /// Get a list of all available grids
    pub fn get_all() -> [Self; 9] {
        [
            Self::Solid,
            Self::Single,
            Self::Corridor,
            Self::Corner,
            Self::Comb,
            Self::Spiral,
            Self::Ring,
            Self::Open,
            Self::Islands,
        ]
    }

    /// Get the [`Grid`] associated with this enum
    pub fn get_grid(&self) -> Grid {
        match self {
            Self::Solid => from_mask(&GRID_SOLID),
            Self::Single => from_mask(&GRID_SINGLE),
            Self::Corridor => from_mask(&GRID_CORRIDOR),
            Self::Corner => from_mask(&GRID_CORNER),
            Self::Comb => from_mask(&GRID_COMB),
            Self::Spiral => from_mask(&GRID_SPIRAL),
            Self::Ring => from_mask(&GRID_RING),
            Self::Open => from_mask(&GRID_OPEN),
            Self::Islands => from_mask(&GRID_ISLANDS),
        }
    }

    /// Whether this grid is a perfect maze
    pub fn is_perfect(&self) -> bool {
        matches!(
            self,
            Self::Single | Self::Corridor | Self::Corner | Self::Comb | Self::Spiral
        )
    }
}

fn from_mask<const C: usize>(mask: &[[bool; C]]) -> Grid {
    Grid::from_walls(Array2::from_shape_fn((mask.len(), C), |(row, col)| {
        mask[row][col]
    }))
}

const W: bool = true;
const O: bool = false;

#[rustfmt::skip]
const GRID_SOLID: [[bool; 3]; 3] = [
    [W, W, W],
    [W, W, W],
    [W, W, W],
];

#[rustfmt::skip]
const GRID_SINGLE: [[bool; 3]; 3] = [
    [W, W, W],
    [W, O, W],
    [W, W, W],
];

#[rustfmt::skip]
const GRID_CORRIDOR: [[bool; 5]; 1] = [
    [O, O, O, O, O],
];

#[rustfmt::skip]
const GRID_CORNER: [[bool; 2]; 2] = [
    [O, W],
    [O, O],
];

#[rustfmt::skip]
const GRID_COMB: [[bool; 5]; 5] = [
    [O, O, O, O, O],
    [O, W, O, W, O],
    [O, W, O, W, O],
    [O, W, O, W, O],
    [W, W, W, W, W],
];

#[rustfmt::skip]
const GRID_SPIRAL: [[bool; 5]; 5] = [
    [O, O, O, O, O],
    [W, W, W, W, O],
    [O, O, O, W, O],
    [O, W, W, W, O],
    [O, O, O, O, O],
];

#[rustfmt::skip]
const GRID_RING: [[bool; 3]; 3] = [
    [O, O, O],
    [O, W, O],
    [O, O, O],
];

#[rustfmt::skip]
const GRID_OPEN: [[bool; 2]; 2] = [
    [O, O],
    [O, O],
];

#[rustfmt::skip]
const GRID_ISLANDS: [[bool; 3]; 3] = [
    [O, W, O],
    [O, W, O],
    [O, W, O],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::IntLocation;

    #[test]
    fn shapes() {
        assert_eq!(StandardGrid::Corridor.get_grid().rows(), 1);
        assert_eq!(StandardGrid::Corridor.get_grid().cols(), 5);
        assert_eq!(StandardGrid::Spiral.get_grid().rows(), 5);
    }

    #[test]
    fn path_counts() {
        let counts: Vec<_> = StandardGrid::get_all()
            .iter()
            .map(|g| g.get_grid().path_count())
            .collect();
        assert_eq!(counts, vec![0, 1, 5, 3, 14, 17, 8, 4, 6]);
    }

    #[test]
    fn masks_keep_orientation() {
        let grid = StandardGrid::Corner.get_grid();
        assert!(grid.is_path(&IntLocation::new(1, 0)));
        assert!(grid.wall_at(&IntLocation::new(0, 1)));
    }
}
