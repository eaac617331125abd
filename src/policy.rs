// Per-turn move selection
//
// Legal moves come from the configured candidate order. A hungry snake steps
// toward the nearest food it can reach; otherwise the first legal move wins.

use log::{debug, warn};

use crate::config::PolicyConfig;
use crate::error::{EngineError, Result};
use crate::graph::Graph;
use crate::legality::legal_moves;
use crate::pathfinding::{closest_food, directions_toward, foods_by_distance, path_exists_within, Deadline};
use crate::types::{Direction, GameState};

/// Health below which the snake goes looking for food
pub fn survival_threshold(state: &GameState) -> i32 {
    (state.board.width + state.board.height) / 2
}

/// Chooses a direction for one turn.
///
/// Fails with `NoLegalMove` when every candidate is unsafe. Running out of
/// time while searching for food falls back to the first legal move.
pub fn decide(state: &GameState, config: &PolicyConfig, deadline: &Deadline) -> Result<Direction> {
    let legal = legal_moves(state, &config.candidate_order, config.wall_policy);
    let fallback = match legal.first() {
        Some(direction) => *direction,
        None => return Err(EngineError::NoLegalMove { turn: state.turn }),
    };

    if state.you.health >= survival_threshold(state) {
        return Ok(fallback);
    }

    match seek_food(state, config, &legal, deadline) {
        Ok(Some(direction)) => Ok(direction),
        Ok(None) => Ok(fallback),
        Err(EngineError::NoFood) => {
            debug!("Turn {}: hungry but no food on the board", state.turn);
            Ok(fallback)
        }
        Err(EngineError::DeadlineExceeded) => {
            warn!(
                "Turn {}: deadline reached while searching for food, going {}",
                state.turn, fallback
            );
            Ok(fallback)
        }
        Err(e) => Err(e),
    }
}

/// Walks food nearest-first and returns the first legal step toward one that
/// is reachable. `Ok(None)` means no food could be approached this turn.
fn seek_food(
    state: &GameState,
    config: &PolicyConfig,
    legal: &[Direction],
    deadline: &Deadline,
) -> Result<Option<Direction>> {
    let nearest = closest_food(state)?;
    debug!("Turn {}: nearest food at {}", state.turn, nearest);

    let head = state.you.head;
    let mut graph = if config.check_reachability {
        Some(Graph::from_state(state))
    } else {
        None
    };

    for food in foods_by_distance(state) {
        if deadline.expired() {
            return Err(EngineError::DeadlineExceeded);
        }

        for direction in directions_toward(head, food) {
            if !legal.contains(&direction) {
                continue;
            }

            let reachable = match graph.as_mut() {
                Some(graph) => path_exists_within(graph, direction.apply(&head), food, deadline)?,
                None => true,
            };

            if reachable {
                debug!("Turn {}: heading {} toward food at {}", state.turn, direction, food);
                return Ok(Some(direction));
            }
        }
    }

    Ok(None)
}
