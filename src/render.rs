#![cfg(feature = "std")]

//! Text rendering and coordinate parsing for the CLI.

use std::fmt::Write as _;
use std::string::String;

use crate::common::{CellState, Coord};
use crate::config::{COLS, ROWS};
use crate::grid::GridSnapshot;

/// Render a board snapshot with `A..` column labels and `1..` row labels.
pub fn render_board(snap: &GridSnapshot, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = write!(out, "    ");
    for c in 0..COLS {
        let _ = write!(out, "{} ", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out);
    for (r, row) in snap.rows().enumerate() {
        let _ = write!(out, "{:>2}  ", r + 1);
        for cell in row {
            let symbol = match cell {
                CellState::Empty => '·',
                CellState::Occupied => '■',
                CellState::Miss => 'o',
                CellState::Hit => 'X',
            };
            let _ = write!(out, "{} ", symbol);
        }
        let _ = writeln!(out);
    }
    out
}

/// Format a coordinate as column letter plus 1-based row, e.g. `B4`.
pub fn coord_label((row, col): Coord) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

/// Parse a coordinate like `B4`: column letter, then 1-based row number.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > ROWS || col >= COLS {
        return None;
    }
    Some((row - 1, col))
}
