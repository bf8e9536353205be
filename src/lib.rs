#![warn(missing_docs)]
//! Structural checks for wall/path grids
//!
//! A grid is a *perfect maze* when its path cells, joined up/down/left/right, form a single
//! spanning tree: every path cell reaches every other, and there are no loops.
//!
//! ```
//! use perfect_maze::grid::Grid;
//! use perfect_maze::is_perfect_maze;
//!
//! let grid = Grid::from_rows(&[[0, 1], [0, 0]]).unwrap();
//! assert!(is_perfect_maze(&grid));
//! ```

pub mod batch;
pub mod grid;
pub mod validation;

pub use validation::{analyze, is_perfect_maze, validate_maze, MazeReport, MazeVerdict};
