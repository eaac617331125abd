// Library exports for the Battlesnake bot
// The binary only wires configuration and Rocket together; everything else lives here

pub mod actor;
pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod display;
pub mod error;
pub mod graph;
pub mod handler;
pub mod legality;
pub mod pathfinding;
pub mod policy;
pub mod registry;
pub mod types;
