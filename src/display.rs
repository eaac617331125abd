// Plain-text board rendering for debug logs
//
// The board is drawn as quadrant I of the plane: the top line is the highest
// row and (0, 0) is the bottom-left character.

use std::fmt::Write;

use crate::types::{Coord, GameState};

const EMPTY: char = '-';
const FOOD: char = 'f';
const HAZARD: char = 'h';

/// Renders the board with one letter per snake (A, B, ...), `f` for food and
/// `h` for hazards. Off-board coordinates are skipped.
pub fn render_board(state: &GameState) -> String {
    let width = state.board.width.max(0) as usize;
    let height = state.board.height.max(0) as usize;
    let mut grid = vec![vec![EMPTY; width]; height];

    let mut place = |x: i32, y: i32, symbol: char| {
        if state.board.contains(Coord::new(x, y)) {
            grid[y as usize][x as usize] = symbol;
        }
    };

    for (index, snake) in state.board.snakes.iter().enumerate() {
        let symbol = snake_symbol(index);
        for segment in &snake.body {
            place(segment.x, segment.y, symbol);
        }
    }
    for food in &state.board.food {
        place(food.x, food.y, FOOD);
    }
    for hazard in &state.board.hazards {
        place(hazard.x, hazard.y, HAZARD);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Turn: {}", state.turn);
    for row in grid.iter().rev() {
        out.push(' ');
        for symbol in row {
            out.push(*symbol);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn snake_symbol(index: usize) -> char {
    // A..Z, then a..z, then '?' for anything beyond
    match index {
        0..=25 => (b'A' + index as u8) as char,
        26..=51 => (b'a' + (index - 26) as u8) as char,
        _ => '?',
    }
}
