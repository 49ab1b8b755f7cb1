//! Read-only text projection of a grid.

use alloc::string::String;

use crate::grid::{CellStatus, Grid};

/// Display switches for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Show unhit ship segments as `#` instead of water.
    pub reveal_ships: bool,
}

impl RenderOptions {
    pub const HIDDEN: Self = Self {
        reveal_ships: false,
    };
    pub const REVEAL: Self = Self { reveal_ships: true };
}

/// Character for one cell: `.` water, `O` miss, `X` hit, and `#` for a ship
/// only when revealing.
pub fn cell_char(status: CellStatus, options: RenderOptions) -> char {
    match status {
        CellStatus::Ship if options.reveal_ships => '#',
        CellStatus::Hit => 'X',
        CellStatus::Miss => 'O',
        CellStatus::Empty | CellStatus::Ship => '.',
    }
}

/// Grid as text, one line per row, each terminated by `\n`.
pub fn render(grid: &Grid, options: RenderOptions) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for (coord, status) in grid.iter() {
        out.push(cell_char(status, options));
        if coord.x + 1 == size {
            out.push('\n');
        }
    }
    out
}
