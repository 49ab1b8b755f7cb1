//! Square grid of cell statuses with bounds-checked access.
//!
//! Cells are stored row-major (`y * size + x`). The grid itself enforces no
//! game rules: any in-bounds cell can be overwritten with any status.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::GridError;
use crate::render::{cell_char, RenderOptions};

/// A position on the grid. Validity is relative to a specific [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// Untouched water.
    #[default]
    Empty,
    /// Occupied by a ship segment that has not been hit.
    Ship,
    /// Ship segment that has been shot.
    Hit,
    /// Water that has been shot.
    Miss,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellStatus>,
}

impl Grid {
    /// Create a `size × size` grid with every cell empty.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellStatus::Empty; size * size],
        }
    }

    /// Edge length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Status of the cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<CellStatus, GridError> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at `coord` unconditionally.
    pub fn set(&mut self, coord: Coordinate, status: CellStatus) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx] = status;
        Ok(())
    }

    /// Returns `true` when `coord` and its up-to-eight neighbours hold no
    /// unhit ship segment. Neighbours falling off the grid are ignored;
    /// a coordinate outside the grid is never clear.
    pub fn is_clear(&self, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }
        let x_lo = coord.x.saturating_sub(1);
        let y_lo = coord.y.saturating_sub(1);
        let x_hi = (coord.x + 1).min(self.size.saturating_sub(1));
        let y_hi = (coord.y + 1).min(self.size.saturating_sub(1));
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                if self.cells[y * self.size + x] == CellStatus::Ship {
                    return false;
                }
            }
        }
        true
    }

    /// Number of cells currently holding `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&c| c == status).count()
    }

    /// Iterator over every `(coordinate, status)` pair, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellStatus)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &status)| (Coordinate::new(i % size, i / size), status))
    }

    /// One row of the grid, left to right.
    pub fn row(&self, y: usize) -> Result<&[CellStatus], GridError> {
        if y >= self.size {
            return Err(GridError::OutOfBounds {
                x: 0,
                y,
                size: self.size,
            });
        }
        Ok(&self.cells[y * self.size..(y + 1) * self.size])
    }

    #[inline]
    fn index(&self, coord: Coordinate) -> Result<usize, GridError> {
        if self.contains(coord) {
            Ok(coord.y * self.size + coord.x)
        } else {
            Err(GridError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                size: self.size,
            })
        }
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = cell_char(self.cells[y * self.size + x], RenderOptions::REVEAL);
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
