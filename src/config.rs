/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Standard fleet: one five, two fours and a two.
pub const DEFAULT_FLEET: [usize; 4] = [5, 4, 4, 2];

/// Pivot attempts every ship gets before the board size is added on top.
pub const BASE_RETRIES: usize = 10;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Number of random pivots Placement Search tries on a board of `size`.
pub const fn retry_budget(size: usize) -> usize {
    BASE_RETRIES + size
}
