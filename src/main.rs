#[macro_use]
extern crate rocket;

use log::info;
use rocket::data::{Limits, ToByteUnit};
use std::env;

use actor_snake::bot::Bot;
use actor_snake::config::Config;
use actor_snake::debug_logger::DebugLogger;
use actor_snake::handler;

#[launch]
async fn rocket() -> _ {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting Battlesnake Server...");

    // Load configuration once at startup
    let config = Config::load_or_default();

    // Lots of web hosting services expect you to bind to the port specified by the `PORT`
    // environment variable, so it wins over Snake.toml.
    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    info!("Binding to {}:{}", config.server.address, port);

    // Game states for big boards easily exceed Rocket's 8 KiB default for strings
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", port))
        .merge(("limits", Limits::default().limit("string", 1.mebibytes())));

    let journal = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path).await;
    let bot = Bot::with_journal(config, journal);

    handler::mount(rocket::custom(figment), bot)
}
