//! Wire format and HTTP endpoint tests

use actor_snake::bot::Bot;
use actor_snake::config::Config;
use actor_snake::error::EngineError;
use actor_snake::handler;
use actor_snake::types::{parse_snapshot, Coord, Direction, MAX_BOARD_SIDE};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::Value;

fn move_request(game_id: &str, turn: i32) -> String {
    format!(
        r##"{{
            "game": {{
                "id": "{game_id}",
                "ruleset": {{ "name": "standard", "version": "v1.2.3" }},
                "timeout": 500
            }},
            "turn": {turn},
            "board": {{
                "height": 11,
                "width": 11,
                "food": [{{ "x": 5, "y": 5 }}, {{ "x": 9, "y": 0 }}],
                "hazards": [{{ "x": 0, "y": 0 }}],
                "snakes": [
                    {{
                        "id": "snake-508e96ac",
                        "name": "My Snake",
                        "health": 54,
                        "body": [{{ "x": 0, "y": 10 }}, {{ "x": 1, "y": 10 }}, {{ "x": 2, "y": 10 }}],
                        "latency": "111",
                        "head": {{ "x": 0, "y": 10 }},
                        "length": 3,
                        "shout": "why are we shouting??",
                        "squad": ""
                    }}
                ]
            }},
            "you": {{
                "id": "snake-508e96ac",
                "name": "My Snake",
                "health": 54,
                "body": [{{ "x": 0, "y": 10 }}, {{ "x": 1, "y": 10 }}, {{ "x": 2, "y": 10 }}],
                "latency": 111,
                "head": {{ "x": 0, "y": 10 }},
                "length": 3,
                "shout": "",
                "squad": ""
            }}
        }}"##,
        game_id = game_id,
        turn = turn
    )
}

fn client() -> Client {
    let rocket = handler::mount(rocket::build(), Bot::new(Config::default_hardcoded()));
    Client::tracked(rocket).expect("valid rocket instance")
}

#[test]
fn test_parse_full_snapshot() {
    let state = parse_snapshot(move_request("g", 14).as_bytes()).expect("valid snapshot");

    assert_eq!(state.game.id, "g");
    assert_eq!(state.game.ruleset.name, "standard");
    assert_eq!(state.game.ruleset.version, "v1.2.3");
    assert_eq!(state.game.timeout, 500);
    assert_eq!(state.turn, 14);
    assert_eq!(state.board.width, 11);
    assert_eq!(state.board.food[1], Coord { x: 9, y: 0 });
    assert_eq!(state.board.hazards.len(), 1);
    assert_eq!(state.board.snakes[0].latency, "111");
    assert_eq!(state.you.latency, "111");
    assert_eq!(state.you.head, Coord { x: 0, y: 10 });
    assert_eq!(state.you.length, 3);
}

#[test]
fn test_parse_tolerates_missing_optional_fields() {
    let body = br#"{
        "game": { "id": "g", "ruleset": { "name": "solo" }, "timeout": 500 },
        "turn": 0,
        "board": { "height": 7, "width": 7, "food": [], "snakes": [] },
        "you": { "id": "a", "name": "a", "health": 100, "body": [], "head": { "x": 3, "y": 3 } }
    }"#;

    let state = parse_snapshot(body).expect("valid snapshot");
    assert!(state.board.hazards.is_empty());
    assert!(state.game.ruleset.version.is_empty());
    assert_eq!(state.you.shout, "");
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(matches!(
        parse_snapshot(b"{ not json"),
        Err(EngineError::Parse(_))
    ));
}

#[test]
fn test_parse_rejects_incomplete_snapshot() {
    let body = br#"{ "game": { "id": "g", "ruleset": { "name": "standard" }, "timeout": 500 }, "turn": 1 }"#;
    assert!(matches!(parse_snapshot(body), Err(EngineError::Parse(_))));
}

fn sized_request(game_id: &str, width: i32, height: i32) -> String {
    move_request(game_id, 1)
        .replace("\"width\": 11", &format!("\"width\": {}", width))
        .replace("\"height\": 11", &format!("\"height\": {}", height))
}

#[test]
fn test_parse_rejects_oversized_board() {
    for (width, height) in [(50_000, 50_000), (11, MAX_BOARD_SIDE + 1), (i32::MAX, 11)] {
        let body = sized_request("huge", width, height);
        assert!(
            matches!(parse_snapshot(body.as_bytes()), Err(EngineError::Parse(_))),
            "{}x{} board should be rejected",
            width,
            height
        );
    }
}

#[test]
fn test_parse_accepts_largest_board() {
    let body = sized_request("big", MAX_BOARD_SIDE, MAX_BOARD_SIDE);
    let state = parse_snapshot(body.as_bytes()).expect("board at the limit");
    assert_eq!(state.board.width, MAX_BOARD_SIDE);
}

#[test]
fn test_direction_wire_format() {
    assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"left\"");
    let parsed: Direction = serde_json::from_str("\"right\"").unwrap();
    assert_eq!(parsed, Direction::Right);
}

#[test]
fn test_index_returns_identity() {
    let client = client();
    let response = client.get("/").dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Server"),
        Some("battlesnake/github/actor-snake")
    );
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body["apiversion"], "1");
    assert_eq!(body["author"], "jmbaur");
}

#[test]
fn test_full_game_over_http() {
    let client = client();

    let start = client
        .post("/start")
        .header(ContentType::JSON)
        .body(move_request("http-game", 0))
        .dispatch();
    assert_eq!(start.status(), Status::Ok);

    let moved = client
        .post("/move")
        .header(ContentType::JSON)
        .body(move_request("http-game", 1))
        .dispatch();
    assert_eq!(moved.status(), Status::Ok);
    let body: Value = moved.into_json().expect("json body");
    // Head at top-left with its body to the right: only down is open
    assert_eq!(body["move"], "down");
    assert_eq!(body["shout"], "hello, world");

    let end = client
        .post("/end")
        .header(ContentType::JSON)
        .body(move_request("http-game", 2))
        .dispatch();
    assert_eq!(end.status(), Status::Ok);
}

#[test]
fn test_malformed_move_gets_bad_request() {
    let client = client();
    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body("{ \"turn\": 3 }")
        .dispatch();

    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().expect("json body");
    assert!(body["error"].as_str().unwrap().contains("failed to parse"));
}

#[test]
fn test_end_of_untracked_game_is_acknowledged() {
    let client = client();
    let response = client
        .post("/end")
        .header(ContentType::JSON)
        .body(move_request("never-started", 9))
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
}

#[test]
fn test_oversized_board_gets_bad_request() {
    let client = client();
    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(sized_request("huge", 50_000, 50_000))
        .dispatch();

    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().expect("json body");
    assert!(body["error"].as_str().unwrap().contains("exceeds"));
}

#[test]
fn test_requests_without_content_type_are_parsed() {
    let client = client();

    let malformed = client.post("/move").body("{ \"turn\": 3 }").dispatch();
    assert_eq!(malformed.status(), Status::BadRequest);
    let body: Value = malformed.into_json().expect("json body");
    assert!(body["error"].is_string());

    let start = client.post("/start").body(move_request("bare", 0)).dispatch();
    assert_eq!(start.status(), Status::Ok);

    let moved = client.post("/move").body(move_request("bare", 1)).dispatch();
    assert_eq!(moved.status(), Status::Ok);
    let body: Value = moved.into_json().expect("json body");
    assert_eq!(body["move"], "down");

    let end = client.post("/end").body(move_request("bare", 2)).dispatch();
    assert_eq!(end.status(), Status::Ok);
}
