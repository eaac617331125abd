// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::legality::WallPolicy;
use crate::types::Direction;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub identity: IdentityConfig,
    pub timing: TimingConfig,
    pub policy: PolicyConfig,
    pub debug: DebugConfig,
}

/// Bind address for the HTTP server
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

/// Metadata returned from GET / and the shout attached to every move
#[derive(Debug, Deserialize, Clone)]
pub struct IdentityConfig {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub version: String,
    pub shout: String,
}

/// Timing and performance constants
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    pub response_time_budget_ms: u64,
    pub network_overhead_ms: u64,
}

impl TimingConfig {
    /// Computes the effective computation budget
    pub fn effective_budget_ms(&self) -> u64 {
        self.response_time_budget_ms.saturating_sub(self.network_overhead_ms)
    }

    /// Budget for one turn given the timeout the game server announced.
    /// A zero timeout means the server did not send one.
    pub fn turn_budget(&self, game_timeout_ms: u32) -> Duration {
        let effective = self.effective_budget_ms();
        if game_timeout_ms == 0 {
            return Duration::from_millis(effective);
        }

        let announced = u64::from(game_timeout_ms).saturating_sub(self.network_overhead_ms);
        Duration::from_millis(effective.min(announced))
    }
}

/// Per-turn move selection settings
#[derive(Debug, Deserialize, Clone)]
pub struct PolicyConfig {
    /// Directions are tried in this order; the first legal one is the fallback
    pub candidate_order: Vec<Direction>,
    pub wall_policy: WallPolicy,
    /// Only step toward food that a search confirms is reachable
    pub check_reachability: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            candidate_order: vec![
                Direction::Up,
                Direction::Down,
                Direction::Right,
                Direction::Left,
            ],
            wall_policy: WallPolicy::Strict,
            check_reachability: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
    /// Render every board at debug log level
    pub print_board: bool,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        let config: Config =
            toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))?;

        if config.policy.candidate_order.is_empty() {
            return Err("policy.candidate_order must name at least one direction".to_string());
        }

        Ok(config)
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            server: ServerConfig {
                address: "127.0.0.1".to_string(),
                port: 8080,
            },
            identity: IdentityConfig {
                apiversion: "1".to_string(),
                author: "jmbaur".to_string(),
                color: "#0000ff".to_string(),
                head: "default".to_string(),
                tail: "default".to_string(),
                version: "0.0.1-beta".to_string(),
                shout: "hello, world".to_string(),
            },
            timing: TimingConfig {
                response_time_budget_ms: 500,
                network_overhead_ms: 50,
            },
            policy: PolicyConfig::default(),
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
                print_board: false,
            },
        }
    }

    /// Loads Snake.toml, falling back to the hardcoded defaults
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
