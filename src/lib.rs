#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod common;
pub mod config;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
mod render;
mod ship;

pub use common::*;
pub use fleet::{Fleet, FleetBuilder};
pub use game::GameSession;
pub use grid::{CellStatus, Coordinate, Grid};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use placement::{find_placement, free_segments, Placement, Segment};
pub use render::{cell_char, render, RenderOptions};
pub use ship::{Orientation, Ship};
