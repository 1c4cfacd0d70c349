use std::fmt::Write;

use bombsweep_core::{Cell, GameSnapshot, GameStatus, InputMode};

fn cell_glyph(cell: &Cell, snapshot: &GameSnapshot) -> char {
    let finished = snapshot.status.is_finished();
    if snapshot.triggered == Some(cell.coords()) {
        'X'
    } else if cell.is_flagged() {
        'F'
    } else if cell.is_bomb() && (cell.is_revealed() || finished) {
        '*'
    } else if !cell.is_revealed() {
        '#'
    } else {
        match cell.adjacent_bombs() {
            0 => '.',
            count => char::from(b'0' + count),
        }
    }
}

/// Text rendering of the board with row and column labels and a status line.
pub fn render(snapshot: &GameSnapshot) -> String {
    let grid = &snapshot.grid;
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..grid.side() {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for row in 0..grid.side() {
        let _ = write!(out, "{row:>3}");
        for cell in grid.row(row) {
            let _ = write!(out, "{:>3}", cell_glyph(cell, snapshot));
        }
        out.push('\n');
    }

    let mode = match snapshot.input_mode {
        InputMode::Reveal => "reveal",
        InputMode::Flag => "flag",
    };
    let status = match snapshot.status {
        GameStatus::Playing => "playing",
        GameStatus::Won => "you won!",
        GameStatus::Lost => "you died",
    };
    let _ = write!(
        out,
        "mode: {mode} | bombs: {} | flags left: {} | {status}",
        snapshot.config.bombs, snapshot.remaining_flags
    );
    out
}
