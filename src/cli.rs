#![cfg(feature = "std")]

//! Console helpers: coordinate parsing, framed board output, the interactive
//! shooting loop and the generator gallery.

use std::io::{BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{
    common::ShotResult,
    fleet::FleetBuilder,
    game::GameSession,
    grid::{CellStatus, Coordinate, Grid},
    render::{cell_char, RenderOptions},
};

/// Letter-and-number label for a coordinate, e.g. `(1, 6)` is `B7`.
/// Columns past `Z` fall back to `x,y`.
pub fn coord_to_string(coord: Coordinate) -> String {
    if coord.x < 26 {
        let col = (b'A' + coord.x as u8) as char;
        format!("{}{}", col, coord.y + 1)
    } else {
        format!("{},{}", coord.x, coord.y)
    }
}

/// Parse `B7` (column letter, 1-based row) or `1 6` / `1,6` (0-based x y).
///
/// Only the syntax is checked here; bounds are left to the grid so that an
/// off-board shot surfaces as an out-of-bounds error.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let numeric: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if numeric.len() == 2 {
        let x = numeric[0]
            .parse()
            .map_err(|_| format!("Invalid x '{}' - must be a number", numeric[0]))?;
        let y = numeric[1]
            .parse()
            .map_err(|_| format!("Invalid y '{}' - must be a number", numeric[1]))?;
        return Ok(Coordinate::new(x, y));
    }

    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let row_str: String = chars.collect();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - rows start at 1".to_string());
    }
    Ok(Coordinate::new((col_ch as u8 - b'A') as usize, row - 1))
}

/// Write the grid inside a frame with column letters and row numbers.
pub fn write_board<W: Write>(out: &mut W, grid: &Grid, options: RenderOptions) -> std::io::Result<()> {
    let size = grid.size();
    let inner = size * 2 + 4;
    writeln!(out, "    ╔{}╗", "═".repeat(inner))?;
    write!(out, "    ║   ")?;
    for x in 0..size {
        let label = if x < 26 { (b'A' + x as u8) as char } else { '?' };
        write!(out, " {}", label)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠{}╣", "═".repeat(inner))?;
    for y in 0..size {
        write!(out, "    ║ {:2}", y + 1)?;
        for x in 0..size {
            let status = grid.get(Coordinate::new(x, y)).unwrap_or(CellStatus::Empty);
            write!(out, " {}", cell_char(status, options))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚{}╝", "═".repeat(inner))?;
    if options.reveal_ships {
        writeln!(out, "    Legend: #=Ship  X=Hit  O=Miss  .=Water")?;
    } else {
        writeln!(out, "    Legend: X=Hit  O=Miss  .=Unknown")?;
    }
    Ok(())
}

/// Read shots from `input` until every ship is sunk, input ends, or the
/// player types `quit`. Returns the number of shots that changed the board.
pub fn run_interactive<I: BufRead, W: Write>(
    session: &mut GameSession,
    input: I,
    out: &mut W,
    options: RenderOptions,
) -> anyhow::Result<usize> {
    let mut shots = 0;
    writeln!(
        out,
        "{} ships afloat. Enter a target like B7 or '1 6', 'show' to redraw, 'quit' to stop.",
        session.remaining_ships()
    )?;
    write_board(out, session.grid(), options)?;
    for line in input.lines() {
        let line = line?;
        let cmd = line.trim();
        match cmd.to_ascii_lowercase().as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "show" => {
                write_board(out, session.grid(), options)?;
                continue;
            }
            _ => {}
        }

        let target = match parse_coord(cmd) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        match session.shoot(target) {
            Ok(ShotResult::Invalid) => {
                writeln!(out, "{}: already targeted", coord_to_string(target))?;
            }
            Ok(result) => {
                shots += 1;
                let word = if result == ShotResult::Hit { "HIT" } else { "miss" };
                writeln!(
                    out,
                    "{}: {} ({} ships left)",
                    coord_to_string(target),
                    word,
                    session.remaining_ships()
                )?;
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        }
        if session.is_over() {
            write_board(out, session.grid(), RenderOptions::REVEAL)?;
            writeln!(out, "All ships sunk in {} shots!", shots)?;
            break;
        }
    }
    Ok(shots)
}

/// Build `rows × cols` independent boards and lay them out as a text
/// mosaic, ships as `#` and water as `.`, boards separated by one blank
/// column and one blank line.
pub fn gallery<R: Rng>(
    builder: &FleetBuilder,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> anyhow::Result<String> {
    let size = builder.board_size();
    let mut out = String::new();
    for _ in 0..rows {
        let mut boards = Vec::with_capacity(cols);
        for _ in 0..cols {
            let (grid, _) = builder.build(rng)?;
            boards.push(grid);
        }
        for y in 0..size {
            for (i, grid) in boards.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                for &status in grid.row(y)? {
                    out.push(cell_char(status, RenderOptions::REVEAL));
                }
            }
            out.push('\n');
        }
        out.push('\n');
    }
    Ok(out)
}
