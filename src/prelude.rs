//! Commonly used types and utilities for ease of import.

pub use crate::{
    CellStatus, Coordinate, Fleet, FleetBuilder, GameSession, Grid, GridError, RenderOptions,
    ShotResult,
};

#[cfg(feature = "std")]
pub use crate::cli::{parse_coord, run_interactive, write_board};
