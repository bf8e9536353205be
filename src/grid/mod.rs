//! Logical grid structs and utilities.

use anyhow::{anyhow, Error};
use ndarray::{Array2, ArrayView2};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

pub mod standard_grids;

/// An integer location on a [`Grid`]
///
/// Locations order by row first, then by column.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct IntLocation {
    /// Row - increases downwards
    pub row: usize,
    /// Column - increases to the right
    pub col: usize,
}

impl IntLocation {
    /// Create a new IntLocation
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for IntLocation {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Enum for direction values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    /// Up, or -row
    Up,
    /// Right, or +col
    Right,
    /// Down, or +row
    Down,
    /// Left, or -col
    Left,
}

impl Direction {
    /// The four directions of 4-connectivity, in the order neighbors are visited
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// A rectangular 2D grid of walls
///
/// The grid is indexed by `grid[IntLocation]`; `true` is a wall, `false` is a path cell.
///
/// # Examples
///
/// ```
/// use perfect_maze::grid::{Grid, IntLocation};
///
/// let grid = Grid::from_rows(&[[0, 1], [0, 0]]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 2);
/// assert!(grid[IntLocation::new(0, 1)]);
/// assert!(!grid[IntLocation::new(1, 1)]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    walls: Array2<bool>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Grid {
    /// Creates a grid of the given shape where every cell is a wall
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            walls: Array2::from_elem((rows, cols), true),
        }
    }

    /// Wraps an existing wall mask
    pub fn from_walls(walls: Array2<bool>) -> Self {
        Self { walls }
    }

    /// Classifies a matrix of cell values, where `0` is a path and anything else is a wall
    ///
    /// ```
    /// use ndarray::array;
    /// use perfect_maze::grid::Grid;
    ///
    /// let grid = Grid::from_values(array![[0u8, 7], [0, 0]].view());
    /// assert_eq!(grid.path_count(), 3);
    /// ```
    pub fn from_values<T: Zero>(values: ArrayView2<'_, T>) -> Self {
        Self {
            walls: values.map(|v| !v.is_zero()),
        }
    }

    /// Classifies nested rows of cell values, where `0` is a path and anything else is a wall
    ///
    /// Every row must have the same length as the first one.
    ///
    /// ```
    /// use perfect_maze::grid::Grid;
    ///
    /// assert!(Grid::from_rows(&[vec![0, 1], vec![0]]).is_err());
    /// assert_eq!(Grid::from_rows::<i32, Vec<i32>>(&[]).unwrap(), Grid::new(0, 0));
    /// ```
    pub fn from_rows<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(anyhow!(
                    "Row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                ));
            }
            cells.extend(row.iter().map(|v| !v.is_zero()));
        }
        Ok(Self {
            walls: Array2::from_shape_vec((rows.len(), cols), cells)?,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.walls.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.walls.ncols()
    }

    /// Returns the underlying wall mask
    pub fn walls(&self) -> ArrayView2<'_, bool> {
        self.walls.view()
    }

    /// Returns whether the given location is inside the grid
    pub fn in_bounds(&self, p: &IntLocation) -> bool {
        p.row < self.rows() && p.col < self.cols()
    }

    /// Returns whether there is a wall at a given position
    ///
    /// Positions outside the grid are walls.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfect_maze::grid::{Grid, IntLocation};
    ///
    /// let grid = Grid::from_rows(&[[0, 1]]).unwrap();
    /// assert_eq!(grid.wall_at(&IntLocation::new(0, 0)), false);
    /// assert_eq!(grid.wall_at(&IntLocation::new(0, 1)), true);
    /// assert_eq!(grid.wall_at(&IntLocation::new(5, 5)), true);
    /// ```
    pub fn wall_at(&self, p: &IntLocation) -> bool {
        self.walls.get((p.row, p.col)).copied().unwrap_or(true)
    }

    /// Returns whether the given position is an in-bounds path cell
    pub fn is_path(&self, p: &IntLocation) -> bool {
        !self.wall_at(p)
    }

    /// Returns the [`IntLocation`] in the given direction from the given position, or `None` if
    /// the result would be out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfect_maze::grid::{Direction, Grid, IntLocation};
    ///
    /// let grid = Grid::new(3, 3);
    /// let p = IntLocation::new(1, 1);
    /// assert_eq!(grid.next(&p, Direction::Right), Some(IntLocation::new(1, 2)));
    /// assert_eq!(grid.next(&p, Direction::Up), Some(IntLocation::new(0, 1)));
    /// assert_eq!(grid.next(&IntLocation::new(0, 0), Direction::Left), None);
    /// assert_eq!(grid.next(&IntLocation::new(2, 2), Direction::Down), None);
    /// ```
    pub fn next(&self, p: &IntLocation, direction: Direction) -> Option<IntLocation> {
        let next = match direction {
            Direction::Up => IntLocation::new(p.row.checked_sub(1)?, p.col),
            Direction::Right => IntLocation::new(p.row, p.col.checked_add(1)?),
            Direction::Down => IntLocation::new(p.row.checked_add(1)?, p.col),
            Direction::Left => IntLocation::new(p.row, p.col.checked_sub(1)?),
        };
        self.in_bounds(&next).then_some(next)
    }

    /// Returns all the path neighbors of the given position, in [`Direction::ALL`] order.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfect_maze::grid::{Grid, IntLocation};
    ///
    /// let grid = Grid::from_rows(&[[0, 1], [0, 0]]).unwrap();
    /// assert_eq!(
    ///     grid.neighbors(&IntLocation::new(1, 0)).collect::<Vec<_>>(),
    ///     vec![IntLocation::new(0, 0), IntLocation::new(1, 1)]
    /// );
    /// ```
    pub fn neighbors<'a>(
        &'a self,
        p: &'a IntLocation,
    ) -> impl Iterator<Item = IntLocation> + 'a {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.next(p, d))
            .filter(move |n| self.is_path(n))
    }

    /// Iterates over every path cell in row-major order
    pub fn path_cells(&self) -> impl Iterator<Item = IntLocation> + '_ {
        self.walls
            .indexed_iter()
            .filter(|(_, &wall)| !wall)
            .map(|(pos, _)| pos.into())
    }

    /// Number of path cells
    pub fn path_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }
}

impl Index<IntLocation> for Grid {
    type Output = bool;

    fn index(&self, p: IntLocation) -> &bool {
        &self.walls[[p.row, p.col]]
    }
}

impl IndexMut<IntLocation> for Grid {
    fn index_mut(&mut self, p: IntLocation) -> &mut bool {
        &mut self.walls[[p.row, p.col]]
    }
}
