//! Perfect maze detection

use crate::grid::Grid;
use anyhow::{anyhow, Error};
use log::{debug, trace};
use ndarray::Array2;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Why a [`Grid`] is or is not a perfect maze
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MazeVerdict {
    /// There are no path cells at all
    NoPathCells,
    /// Exactly one path cell, which is trivially a tree
    SingleCell,
    /// Some path cells can't be reached from the others
    Disconnected,
    /// Every path cell is reachable, but there is at least one loop
    Cycle,
    /// The path cells form a spanning tree
    Perfect,
}

/// The result of walking the path cells of a [`Grid`]
///
/// Created by [`analyze`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MazeReport {
    /// Total number of path cells in the grid
    pub path_cells: usize,
    /// Number of path cells reachable from the first path cell in row-major order
    pub reached: usize,
    /// Number of distinct adjacencies between reached path cells
    pub edges: usize,
    /// The conclusion drawn from the counts above
    pub verdict: MazeVerdict,
}

impl MazeReport {
    /// Returns whether the grid is a perfect maze
    pub fn is_perfect(&self) -> bool {
        matches!(self.verdict, MazeVerdict::SingleCell | MazeVerdict::Perfect)
    }

    /// The number of edges beyond a spanning tree of the reached cells
    ///
    /// This is the number of independent loops in the reached region.
    pub fn extra_edges(&self) -> usize {
        self.edges.saturating_sub(self.reached.saturating_sub(1))
    }
}

/// Walks the path cells of a [`Grid`] breadth-first and reports whether they form a perfect maze.
///
/// The walk starts at the first path cell in row-major order. An edge is counted once, from
/// whichever of its two cells comes first in row-major order.
///
/// # Examples
///
/// ```
/// use perfect_maze::grid::Grid;
/// use perfect_maze::{analyze, MazeVerdict};
///
/// let report = analyze(&Grid::from_rows(&[[0, 0], [0, 0]]).unwrap());
/// assert_eq!(report.path_cells, 4);
/// assert_eq!(report.edges, 4);
/// assert_eq!(report.verdict, MazeVerdict::Cycle);
/// ```
pub fn analyze(grid: &Grid) -> MazeReport {
    let path_cells = grid.path_count();

    let mut cells = grid.path_cells();
    let start = match (path_cells, cells.next()) {
        (1, Some(_)) => {
            return report(path_cells, 1, 0, MazeVerdict::SingleCell);
        }
        (_, Some(start)) => start,
        (_, None) => {
            return report(0, 0, 0, MazeVerdict::NoPathCells);
        }
    };
    trace!(
        "Walking {} path cells of a {}x{} grid from ({}, {})",
        path_cells,
        grid.rows(),
        grid.cols(),
        start.row,
        start.col
    );

    let mut visited = Array2::from_elem((grid.rows(), grid.cols()), false);
    let mut queue = VecDeque::from([start]);
    visited[[start.row, start.col]] = true;
    let mut reached = 1;
    let mut edges = 0;

    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbors(&current) {
            // each edge is seen from both ends, only count it from the smaller one
            if current < neighbor {
                edges += 1;
            }
            if !visited[[neighbor.row, neighbor.col]] {
                visited[[neighbor.row, neighbor.col]] = true;
                reached += 1;
                queue.push_back(neighbor);
            }
        }
    }

    let verdict = if reached != path_cells {
        MazeVerdict::Disconnected
    } else if edges != path_cells - 1 {
        MazeVerdict::Cycle
    } else {
        MazeVerdict::Perfect
    };
    report(path_cells, reached, edges, verdict)
}

fn report(path_cells: usize, reached: usize, edges: usize, verdict: MazeVerdict) -> MazeReport {
    debug!(
        "{:?}: {} path cells, {} reached, {} edges",
        verdict, path_cells, reached, edges
    );
    MazeReport {
        path_cells,
        reached,
        edges,
        verdict,
    }
}

/// Returns whether the path cells of a [`Grid`] form a perfect maze.
///
/// A perfect maze has at least one path cell, every path cell is reachable from every other one
/// (moving up, down, left or right), and there are no loops.
///
/// # Examples
///
/// ```
/// use perfect_maze::grid::Grid;
/// use perfect_maze::is_perfect_maze;
///
/// assert!(is_perfect_maze(&Grid::from_rows(&[[0, 1], [0, 0]]).unwrap()));
/// assert!(!is_perfect_maze(&Grid::from_rows(&[[0, 0], [0, 0]]).unwrap()));
/// assert!(!is_perfect_maze(&Grid::from_rows(&[[1, 1], [1, 1]]).unwrap()));
/// ```
pub fn is_perfect_maze(grid: &Grid) -> bool {
    analyze(grid).is_perfect()
}

/// Validates that a [`Grid`] is a perfect maze.
///
/// A valid [`Grid`] must satisfy the following conditions:
/// - There must be at least one path cell.
/// - Every path cell must be reachable from every other path cell.
/// - There must be no loops.
pub fn validate_maze(grid: &Grid) -> Result<(), Error> {
    let r = analyze(grid);
    match r.verdict {
        MazeVerdict::SingleCell | MazeVerdict::Perfect => Ok(()),
        MazeVerdict::NoPathCells => Err(Error::msg("No path cells")),
        MazeVerdict::Disconnected => Err(anyhow!(
            "Only {} of {} path cells are connected",
            r.reached,
            r.path_cells
        )),
        MazeVerdict::Cycle => Err(anyhow!(
            "{} edges between {} path cells, {} too many for a tree",
            r.edges,
            r.path_cells,
            r.extra_edges()
        )),
    }
}

/// Returns whether nested rows of cell values form a perfect maze, where `0` is a path and
/// anything else is a wall.
///
/// Fails if the rows are not all the same length.
///
/// ```
/// use perfect_maze::validation::is_perfect_maze_rows;
///
/// assert_eq!(is_perfect_maze_rows(&[[0, 1], [0, 0]]).unwrap(), true);
/// assert!(is_perfect_maze_rows(&[vec![0, 1], vec![0]]).is_err());
/// ```
pub fn is_perfect_maze_rows<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<bool, Error> {
    Ok(is_perfect_maze(&Grid::from_rows(rows)?))
}
