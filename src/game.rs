use alloc::string::String;
use rand::Rng;

use crate::{
    common::{BuildError, GridError, ShotResult},
    fleet::{Fleet, FleetBuilder},
    grid::{CellStatus, Coordinate, Grid},
    render::{render, RenderOptions},
};

/// One game: a finished grid and the fleet laid out on it.
///
/// No win flag is stored; everything is derived from the grid on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    grid: Grid,
    fleet: Fleet,
}

impl GameSession {
    /// Build a fresh board from `builder` and start a session on it.
    pub fn new<R: Rng>(builder: &FleetBuilder, rng: &mut R) -> Result<Self, BuildError> {
        let (grid, fleet) = builder.build(rng)?;
        Ok(Self { grid, fleet })
    }

    /// Wrap an already built grid and fleet.
    pub fn from_parts(grid: Grid, fleet: Fleet) -> Self {
        Self { grid, fleet }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Fire at `target`. Already targeted cells report
    /// [`ShotResult::Invalid`] and stay unchanged.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotResult, GridError> {
        let result = match self.grid.get(target)? {
            CellStatus::Hit | CellStatus::Miss => return Ok(ShotResult::Invalid),
            CellStatus::Empty => {
                self.grid.set(target, CellStatus::Miss)?;
                ShotResult::Miss
            }
            CellStatus::Ship => {
                self.grid.set(target, CellStatus::Hit)?;
                ShotResult::Hit
            }
        };
        Ok(result)
    }

    /// Ships still carrying at least one unhit segment.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.remaining(&self.grid)
    }

    /// `true` once every placed ship is sunk.
    pub fn is_over(&self) -> bool {
        self.remaining_ships() == 0
    }

    pub fn render(&self, options: RenderOptions) -> String {
        render(&self.grid, options)
    }
}
