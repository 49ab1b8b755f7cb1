//! Common types for Battleships: grid and build errors, shot results.

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot struck a ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Cell was already targeted; nothing changed.
    Invalid,
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside `[0, size)²`.
    OutOfBounds { x: usize, y: usize, size: usize },
}

/// Errors returned by a fleet build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Board edge length must be positive.
    EmptyBoard,
    /// Every requested ship must be at least one cell long.
    ZeroLengthShip,
    /// A found placement could not be written to the grid.
    Grid(GridError),
}

impl From<GridError> for BuildError {
    fn from(err: GridError) -> Self {
        BuildError::Grid(err)
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { x, y, size } => {
                write!(f, "OutOfBounds: ({}, {}) outside {}x{} grid", x, y, size, size)
            }
        }
    }
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuildError::EmptyBoard => write!(f, "Board size must be positive"),
            BuildError::ZeroLengthShip => write!(f, "Ship length must be positive"),
            BuildError::Grid(e) => write!(f, "Grid error while placing ship: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
