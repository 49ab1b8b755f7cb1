//! Ship geometry: orientation and the straight run of cells a ship occupies.

use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;
use crate::grid::{CellStatus, Coordinate, Grid};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Along a row: `x` varies, `y` fixed.
    Horizontal,
    /// Along a column: `y` varies, `x` fixed.
    Vertical,
}

impl Orientation {
    /// Orientations to try for a pivot, alternating by coordinate parity so
    /// repeated pivots do not favour one axis.
    pub fn order_for(pivot: Coordinate) -> [Orientation; 2] {
        if (pivot.x + pivot.y) % 2 == 0 {
            [Orientation::Vertical, Orientation::Horizontal]
        } else {
            [Orientation::Horizontal, Orientation::Vertical]
        }
    }

    /// `origin` moved `steps` cells along this axis.
    pub fn advance(self, origin: Coordinate, steps: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(origin.x + steps, origin.y),
            Orientation::Vertical => Coordinate::new(origin.x, origin.y + steps),
        }
    }
}

/// A placed ship: a contiguous, collinear run of cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<Coordinate>,
}

impl Ship {
    /// Ship of `length` cells starting at `origin` and running along
    /// `orientation`.
    pub fn new(origin: Coordinate, orientation: Orientation, length: usize) -> Self {
        let cells = (0..length).map(|i| orientation.advance(origin, i)).collect();
        Ship { orientation, cells }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in order from the ship's origin.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Alive while at least one of its cells is still an unhit ship segment.
    /// Cells off the grid count as gone.
    pub fn is_alive(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .any(|&c| grid.get(c) == Ok(CellStatus::Ship))
    }

    /// Mark every cell of the ship as [`CellStatus::Ship`] on `grid`.
    pub fn mark(&self, grid: &mut Grid) -> Result<(), GridError> {
        for &cell in &self.cells {
            grid.set(cell, CellStatus::Ship)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.cells.first().copied().unwrap_or(Coordinate::new(0, 0));
        write!(
            f,
            "Ship {{ origin: ({}, {}), orientation: {:?}, length: {} }}",
            origin.x,
            origin.y,
            self.orientation,
            self.cells.len(),
        )
    }
}
