//! Builds a grid and its fleet from a list of requested ship lengths.

use alloc::vec::Vec;
use core::cmp::Reverse;
use log::{debug, warn};
use rand::Rng;

use crate::common::BuildError;
use crate::config::{retry_budget, DEFAULT_BOARD_SIZE};
use crate::grid::Grid;
use crate::placement::find_placement;
use crate::ship::Ship;

/// Ships placed during one build, plus the lengths that did not fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: Vec<Ship>,
    skipped: Vec<usize>,
}

impl Fleet {
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Requested lengths that ran out of retries, in processing order.
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Number of ships with at least one unhit segment on `grid`.
    pub fn remaining(&self, grid: &Grid) -> usize {
        self.ships.iter().filter(|s| s.is_alive(grid)).count()
    }
}

/// Collects ship lengths and a board size, then lays the fleet out.
///
/// ```
/// use battleships::FleetBuilder;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let (grid, fleet) = FleetBuilder::new(10)
///     .add_ship(5)
///     .add_ship(2)
///     .build(&mut rng)
///     .unwrap();
/// assert_eq!(grid.size(), 10);
/// assert!(fleet.len() <= 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetBuilder {
    board_size: usize,
    ships: Vec<usize>,
    retries: Option<usize>,
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl FleetBuilder {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ships: Vec::new(),
            retries: None,
        }
    }

    /// Request one more ship of `length` cells.
    pub fn add_ship(mut self, length: usize) -> Self {
        self.ships.push(length);
        self
    }

    pub fn with_ships<I: IntoIterator<Item = usize>>(mut self, lengths: I) -> Self {
        self.ships.extend(lengths);
        self
    }

    /// Override the pivot budget each ship gets (default `10 + board size`).
    pub fn with_retry_budget(mut self, retries: usize) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn requested(&self) -> &[usize] {
        &self.ships
    }

    pub fn retry_budget(&self) -> usize {
        self.retries.unwrap_or(retry_budget(self.board_size))
    }

    /// Place every requested ship, largest first, on a fresh grid.
    ///
    /// A ship that finds no room within the retry budget is left out and its
    /// length recorded in [`Fleet::skipped`]; earlier ships are never moved.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<(Grid, Fleet), BuildError> {
        if self.board_size == 0 {
            return Err(BuildError::EmptyBoard);
        }
        if self.ships.contains(&0) {
            return Err(BuildError::ZeroLengthShip);
        }

        let mut order = self.ships.clone();
        order.sort_by_key(|&len| Reverse(len));

        let retries = self.retry_budget();
        let mut grid = Grid::new(self.board_size);
        let mut fleet = Fleet::default();
        for length in order {
            match find_placement(&grid, length, retries, rng) {
                Some(placement) => {
                    let ship = placement.to_ship();
                    ship.mark(&mut grid)?;
                    debug!(
                        "Placed ship of length {} from ({}, {}) to ({}, {})",
                        length, placement.start.x, placement.start.y, placement.end.x, placement.end.y
                    );
                    fleet.ships.push(ship);
                }
                None => {
                    warn!(
                        "Out of possible positions for ship of length {} after {} attempts",
                        length, retries
                    );
                    fleet.skipped.push(length);
                }
            }
        }
        Ok((grid, fleet))
    }
}
