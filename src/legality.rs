// Move legality checks, evaluated from the controlled snake's head
//
// A move is legal when it stays on the board and does not run into a body
// segment. Running into the head of a snake with less health is allowed,
// since we survive that collision.

use serde::Deserialize;

use crate::types::{Battlesnake, Coord, Direction, GameState};

/// How the board edge is checked
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WallPolicy {
    /// Reject only destinations outside [0, width) x [0, height)
    Strict,
    /// Historical rule: additionally rejects moves down onto row 0 and
    /// left onto column 0
    Legacy,
}

impl Default for WallPolicy {
    fn default() -> Self {
        WallPolicy::Strict
    }
}

/// Checks a move against the strict board edge
pub fn can_move(state: &GameState, direction: Direction) -> bool {
    can_move_with(state, direction, WallPolicy::Strict)
}

/// Checks a move using the given wall policy
pub fn can_move_with(state: &GameState, direction: Direction, walls: WallPolicy) -> bool {
    let head = state.you.head;
    let next = direction.apply(&head);

    if hits_wall(state, next, direction, walls) {
        return false;
    }

    // Head-to-head against a weaker snake wins, even onto an occupied square
    let you_health = state.you.health;
    if state
        .board
        .snakes
        .iter()
        .any(|snake| snake.health < you_health && snake.head == next)
    {
        return true;
    }

    !occupants(state).any(|snake| snake.body.contains(&next))
}

/// Filters `candidates` down to the legal ones, keeping their order
pub fn legal_moves(state: &GameState, candidates: &[Direction], walls: WallPolicy) -> Vec<Direction> {
    candidates
        .iter()
        .copied()
        .filter(|&direction| can_move_with(state, direction, walls))
        .collect()
}

fn hits_wall(state: &GameState, next: Coord, direction: Direction, walls: WallPolicy) -> bool {
    if !state.board.contains(next) {
        return true;
    }

    match (walls, direction) {
        (WallPolicy::Legacy, Direction::Down) => next.y <= 0,
        (WallPolicy::Legacy, Direction::Left) => next.x <= 0,
        _ => false,
    }
}

/// Every snake whose body blocks a square, including our own even when the
/// server left it out of `board.snakes`
fn occupants(state: &GameState) -> impl Iterator<Item = &Battlesnake> {
    let you_listed = state.board.snakes.iter().any(|snake| snake.id == state.you.id);
    state
        .board
        .snakes
        .iter()
        .chain(std::iter::once(&state.you).filter(move |_| !you_listed))
}
