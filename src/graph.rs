// Navigability grid derived from one game state
//
// A Graph is built per decision and thrown away afterwards. Only the
// `visited` scratch flags change after construction, and the pathfinder
// resets them before every search.

use log::debug;

use crate::types::{Coord, GameState};

/// What currently occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

/// One board square as seen by the pathfinder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub visited: bool,
    pub visitable: bool,
    pub kind: CellKind,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            visited: false,
            visitable: true,
            kind: CellKind::Empty,
        }
    }
}

/// Grid of cells indexed as `cells[y][x]`
#[derive(Debug, Clone)]
pub struct Graph {
    width: i32,
    height: i32,
    cells: Vec<Vec<Cell>>,
}

impl Graph {
    /// Creates an all-empty graph. Negative dimensions are treated as zero.
    pub fn empty(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Graph {
            width,
            height,
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    /// Builds the graph for a game state.
    ///
    /// Bodies are marked first, then heads, then food, so a head overrides the
    /// body segment it shares a square with and food overrides both.
    pub fn from_state(state: &GameState) -> Self {
        let mut graph = Graph::empty(state.board.width, state.board.height);

        for snake in &state.board.snakes {
            for segment in &snake.body {
                graph.mark(*segment, false, CellKind::Body);
            }
        }

        for snake in &state.board.snakes {
            graph.mark(snake.head, false, CellKind::Head);
        }

        for food in &state.board.food {
            graph.mark(*food, true, CellKind::Food);
        }

        graph
    }

    fn mark(&mut self, coord: Coord, visitable: bool, kind: CellKind) {
        match self.cell_mut(coord) {
            Some(cell) => {
                cell.visitable = visitable;
                cell.kind = kind;
            }
            None => debug!("Ignoring off-board coordinate {} while building graph", coord),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True when the coordinate lies inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if !self.contains(coord) {
            return None;
        }
        Some(&self.cells[coord.y as usize][coord.x as usize])
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if !self.contains(coord) {
            return None;
        }
        Some(&mut self.cells[coord.y as usize][coord.x as usize])
    }

    /// Overrides the visitable flag of one cell; off-board coordinates are ignored
    pub fn set_visitable(&mut self, coord: Coord, visitable: bool) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.visitable = visitable;
        }
    }

    /// Clears every `visited` flag
    pub fn reset_visited(&mut self) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                cell.visited = false;
            }
        }
    }

    /// In-bounds, visitable neighbours in the order north, east, south, west
    pub fn traversable_neighbors(&self, coord: Coord) -> Vec<Coord> {
        [
            Coord::new(coord.x, coord.y + 1),
            Coord::new(coord.x + 1, coord.y),
            Coord::new(coord.x, coord.y - 1),
            Coord::new(coord.x - 1, coord.y),
        ]
        .iter()
        .copied()
        .filter(|neighbor| self.cell(*neighbor).map_or(false, |cell| cell.visitable))
        .collect()
    }
}
