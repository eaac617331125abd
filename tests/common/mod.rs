// Builders shared by the integration tests
#![allow(dead_code)]

use actor_snake::types::{Battlesnake, Board, Coord, Game, GameState, Ruleset};

pub fn coord(x: i32, y: i32) -> Coord {
    Coord { x, y }
}

pub fn snake(id: &str, health: i32, body: &[(i32, i32)]) -> Battlesnake {
    let body: Vec<Coord> = body.iter().map(|&(x, y)| coord(x, y)).collect();
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health,
        head: body.first().copied().unwrap_or_default(),
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: String::new(),
        squad: String::new(),
    }
}

/// A game state whose `you` is the first snake, or a bodiless snake at the
/// origin when there are none
pub fn state(width: i32, height: i32, snakes: Vec<Battlesnake>, food: &[(i32, i32)]) -> GameState {
    let you = snakes
        .first()
        .cloned()
        .unwrap_or_else(|| snake("you", 100, &[]));
    GameState {
        game: Game {
            id: "test-game".to_string(),
            ruleset: Ruleset {
                name: "standard".to_string(),
                version: "v1.0.0".to_string(),
                settings: None,
            },
            timeout: 500,
            map: None,
            source: None,
        },
        turn: 0,
        board: Board {
            height,
            width,
            food: food.iter().map(|&(x, y)| coord(x, y)).collect(),
            snakes,
            hazards: vec![],
        },
        you,
    }
}

/// Empty board with `you` standing at `head` and nothing else on it
pub fn lone_head(width: i32, height: i32, head: (i32, i32), health: i32) -> GameState {
    let mut you = snake("you", health, &[]);
    you.head = coord(head.0, head.1);
    let mut state = state(width, height, vec![], &[]);
    state.you = you;
    state
}

pub fn with_game(mut state: GameState, game_id: &str, turn: i32) -> GameState {
    state.game.id = game_id.to_string();
    state.turn = turn;
    state
}
