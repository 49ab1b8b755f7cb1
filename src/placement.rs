//! Randomized search for one isolated, straight ship position.
//!
//! Each attempt picks a random pivot cell and scans the whole row and column
//! through it (in an order decided by the pivot's parity). Every cell on the
//! line is classified with [`Grid::is_clear`]; maximal runs of clear cells
//! become [`Segment`]s. A segment long enough for the ship is chosen at
//! random, then a random sub-run inside it.
//!
//! Both orientations of a pivot share one attempt. When every attempt in the
//! budget comes up empty the ship simply has no placement.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::grid::{Coordinate, Grid};
use crate::ship::{Orientation, Ship};

/// Maximal run of clear cells along one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Coordinate,
    pub length: usize,
    pub orientation: Orientation,
}

impl Segment {
    /// Position of a `length`-cell ship starting `offset` cells into the
    /// segment. Caller keeps `offset + length <= self.length`.
    fn placement(&self, offset: usize, length: usize) -> Placement {
        let start = self.orientation.advance(self.start, offset);
        Placement {
            start,
            end: self.orientation.advance(start, length - 1),
            orientation: self.orientation,
        }
    }
}

/// A found ship position, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: Coordinate,
    pub end: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    pub fn length(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.end.x - self.start.x + 1,
            Orientation::Vertical => self.end.y - self.start.y + 1,
        }
    }

    /// Every cell between the two ends.
    pub fn to_ship(&self) -> Ship {
        Ship::new(self.start, self.orientation, self.length())
    }
}

/// Split the full row or column through `pivot` into runs of clear cells.
pub fn free_segments(grid: &Grid, pivot: Coordinate, orientation: Orientation) -> Vec<Segment> {
    let line_start = match orientation {
        Orientation::Horizontal => Coordinate::new(0, pivot.y),
        Orientation::Vertical => Coordinate::new(pivot.x, 0),
    };
    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;
    for i in 0..grid.size() {
        let cell = orientation.advance(line_start, i);
        if grid.is_clear(cell) {
            match current.as_mut() {
                Some(seg) => seg.length += 1,
                None => {
                    current = Some(Segment {
                        start: cell,
                        length: 1,
                        orientation,
                    })
                }
            }
        } else if let Some(seg) = current.take() {
            segments.push(seg);
        }
    }
    segments.extend(current);
    segments
}

/// Look for a position for a ship of `length` cells, trying at most
/// `retries` random pivots. Returns `None` when the budget runs out.
pub fn find_placement<R: Rng>(
    grid: &Grid,
    length: usize,
    retries: usize,
    rng: &mut R,
) -> Option<Placement> {
    let size = grid.size();
    if size == 0 || length == 0 || length > size {
        return None;
    }
    for _ in 0..retries {
        let pivot = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        for orientation in Orientation::order_for(pivot) {
            let fitting: Vec<Segment> = free_segments(grid, pivot, orientation)
                .into_iter()
                .filter(|s| s.length >= length)
                .collect();
            if fitting.is_empty() {
                debug!(
                    "No luck for length {} at ({}, {}) {:?}, trying next combination",
                    length, pivot.x, pivot.y, orientation
                );
                continue;
            }
            let segment = fitting[rng.random_range(0..fitting.len())];
            let offset = rng.random_range(0..=segment.length - length);
            return Some(segment.placement(offset, length));
        }
    }
    None
}
