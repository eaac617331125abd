// Reachability search and food targeting
//
// The search is an iterative depth-first walk over the board graph. It only
// answers whether some path exists; the path it happens to find is not the
// shortest one.

use std::time::{Duration, Instant};

use crate::error::{EngineError, Result};
use crate::graph::Graph;
use crate::types::{Coord, Direction, GameState};

/// Point in time after which a turn must stop searching
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires
    pub fn none() -> Self {
        Deadline { at: None }
    }

    pub fn after(budget: Duration) -> Self {
        Deadline {
            at: Some(Instant::now() + budget),
        }
    }

    pub fn expired(&self) -> bool {
        self.at.map_or(false, |at| Instant::now() >= at)
    }
}

/// Returns whether `goal` can be reached from `start` through visitable cells.
///
/// The start cell itself does not need to be visitable, since it is usually
/// a snake head.
pub fn path_exists(graph: &mut Graph, start: Coord, goal: Coord) -> bool {
    // An unbounded search cannot run out of time
    path_exists_within(graph, start, goal, &Deadline::none()).unwrap_or(false)
}

/// Same as [`path_exists`], giving up with `DeadlineExceeded` once the
/// deadline passes.
pub fn path_exists_within(
    graph: &mut Graph,
    start: Coord,
    goal: Coord,
    deadline: &Deadline,
) -> Result<bool> {
    if start == goal {
        return Ok(true);
    }

    graph.reset_visited();

    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        if deadline.expired() {
            return Err(EngineError::DeadlineExceeded);
        }

        match graph.cell_mut(current) {
            Some(cell) if !cell.visited => cell.visited = true,
            Some(_) => continue,
            None => continue,
        }

        // Pushed in reverse so north is expanded first
        for neighbor in graph.traversable_neighbors(current).into_iter().rev() {
            if neighbor == goal {
                return Ok(true);
            }
            if graph.cell(neighbor).map_or(false, |cell| !cell.visited) {
                stack.push(neighbor);
            }
        }
    }

    Ok(false)
}

/// All food on the board, nearest to our head first. Equal distances keep
/// board order.
pub fn foods_by_distance(state: &GameState) -> Vec<Coord> {
    let head = state.you.head;
    let mut foods = state.board.food.clone();
    foods.sort_by_key(|food| head.distance_squared(food));
    foods
}

/// The food nearest to our head by straight-line distance
pub fn closest_food(state: &GameState) -> Result<Coord> {
    let head = state.you.head;
    let mut closest: Option<Coord> = None;

    for food in &state.board.food {
        match closest {
            Some(best) if head.distance_squared(&best) <= head.distance_squared(food) => {}
            _ => closest = Some(*food),
        }
    }

    closest.ok_or(EngineError::NoFood)
}

/// Directions that bring `from` closer to `to`, dominant axis first.
/// Empty when the two coordinates are equal.
pub fn directions_toward(from: Coord, to: Coord) -> Vec<Direction> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let horizontal = match dx.signum() {
        1 => Some(Direction::Right),
        -1 => Some(Direction::Left),
        _ => None,
    };
    let vertical = match dy.signum() {
        1 => Some(Direction::Up),
        -1 => Some(Direction::Down),
        _ => None,
    };

    let ordered = if dx.abs() > dy.abs() {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };

    ordered.iter().flatten().copied().collect()
}
