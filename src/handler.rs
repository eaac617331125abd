// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Parsing the raw request body into a game state
// - Answering malformed bodies with a JSON error instead of failing
// - Delegating to Bot methods

use log::warn;
use rocket::fairing::AdHoc;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{get, post, routes, Build, Rocket, Route, State};
use serde_json::{json, Value};

use crate::bot::Bot;
use crate::types::{parse_snapshot, GameState};

type Rejection = Custom<Json<Value>>;

/// GET / endpoint
/// Returns bot metadata and appearance configuration
#[get("/")]
pub fn index(bot: &State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /start endpoint
/// Registers the game and spawns its decision actor
#[post("/start", data = "<body>")]
pub fn start(bot: &State<Bot>, body: String) -> Result<Status, Rejection> {
    let state = parse(&body)?;
    bot.start(&state);

    Ok(Status::Ok)
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", data = "<body>")]
pub async fn get_move(bot: &State<Bot>, body: String) -> Result<Json<Value>, Rejection> {
    let state = parse(&body)?;

    Ok(Json(bot.get_move(state).await))
}

/// POST /end endpoint
/// Stops the game's actor; an unknown game is logged but still acknowledged
#[post("/end", data = "<body>")]
pub fn end(bot: &State<Bot>, body: String) -> Result<Status, Rejection> {
    let state = parse(&body)?;
    if let Err(e) = bot.end(&state.game.id) {
        warn!("End request rejected: {}", e);
    }

    Ok(Status::Ok)
}

pub fn routes() -> Vec<Route> {
    routes![index, start, get_move, end]
}

/// Attaches the bot, the API routes and the Server header to a Rocket instance
pub fn mount(rocket: Rocket<Build>, bot: Bot) -> Rocket<Build> {
    rocket
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/github/actor-snake");
            })
        }))
        .mount("/", routes())
}

fn parse(body: &str) -> Result<GameState, Rejection> {
    parse_snapshot(body.as_bytes()).map_err(|e| {
        warn!("Rejecting request body: {}", e);
        Custom(Status::BadRequest, Json(json!({ "error": e.to_string() })))
    })
}
