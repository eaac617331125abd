// Battlesnake service object
//
// Owns the game registry and answers the four API calls. Everything the core
// reports as a failure is turned into an explicit, logged fallback here; no
// request is ever left without a move.

use log::{info, warn};
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::error::Result;
use crate::registry::GameRegistry;
use crate::types::{Board, Coord, Direction, GameState};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    registry: GameRegistry,
    journal: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and no journal
    pub fn new(config: Config) -> Self {
        Self::with_journal(config, DebugLogger::disabled())
    }

    pub fn with_journal(config: Config, journal: DebugLogger) -> Self {
        let registry = GameRegistry::new(&config);
        Bot {
            config,
            registry,
            journal,
        }
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let identity = &self.config.identity;
        json!({
            "apiversion": identity.apiversion,
            "author": identity.author,
            "color": identity.color,
            "head": identity.head,
            "tail": identity.tail,
            "version": identity.version,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, state: &GameState) {
        info!("GAME START {}", state.game.id);
        self.registry.start(state);
    }

    /// Asks the game's actor for a move
    /// Corresponds to POST /move endpoint
    ///
    /// When the actor cannot answer (untracked game, stopped actor, or no
    /// legal move) the least-bad direction is chosen and the shout says why.
    pub async fn get_move(&self, state: GameState) -> Value {
        let game_id = state.game.id.clone();
        let turn = state.turn;
        let head = state.you.head;
        let board = state.board.clone();

        match self.registry.decide(state).await {
            Ok(decision) => {
                info!(
                    "Game {} turn {}: going {} (decision #{}, {}ms)",
                    game_id,
                    turn,
                    decision.direction,
                    decision.sequence,
                    decision.elapsed.as_millis()
                );
                self.journal.log_move(&game_id, turn, board, decision.direction);

                json!({ "move": decision.direction, "shout": self.config.identity.shout })
            }
            Err(e) => {
                let direction = Self::fallback_direction(&board, head);
                warn!(
                    "Game {} turn {}: {}; falling back to {}",
                    game_id, turn, e, direction
                );
                self.journal.log_move(&game_id, turn, board, direction);

                json!({ "move": direction, "shout": e.to_string() })
            }
        }
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game_id: &str) -> Result<()> {
        info!("GAME OVER {}", game_id);
        self.registry.end(game_id)
    }

    /// First direction, in `Direction::all()` order, that stays on the board.
    /// Up when even that is impossible.
    pub fn fallback_direction(board: &Board, head: Coord) -> Direction {
        Direction::all()
            .iter()
            .copied()
            .find(|direction| board.contains(direction.apply(&head)))
            .unwrap_or(Direction::Up)
    }
}
