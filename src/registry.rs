// Directory of running games
//
// Maps a game id to the mailbox of its decision actor. The map lock is only
// held to insert, look up or remove a handle, never while a turn is being
// decided, so one game never waits on another.

use log::{info, warn};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::actor::{self, ActorHandle, ActorSettings, Decision};
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::types::GameState;

/// Tracks one decision actor per active game
pub struct GameRegistry {
    games: Mutex<HashMap<String, ActorHandle>>,
    settings: Arc<ActorSettings>,
}

impl GameRegistry {
    pub fn new(config: &Config) -> Self {
        GameRegistry {
            games: Mutex::new(HashMap::new()),
            settings: Arc::new(ActorSettings::from(config)),
        }
    }

    /// Spawns an actor for a new game. Returns false, without spawning, when
    /// the game is already tracked.
    pub fn start(&self, state: &GameState) -> bool {
        let mut games = self.games.lock();
        if games.contains_key(&state.game.id) {
            warn!("Game {} already started, ignoring duplicate start", state.game.id);
            return false;
        }

        let handle = actor::spawn(state.game.id.clone(), Arc::clone(&self.settings));
        games.insert(state.game.id.clone(), handle);
        info!("Game {} registered ({} active)", state.game.id, games.len());
        true
    }

    /// Hands the turn to the game's actor and waits for its decision
    pub async fn decide(&self, state: GameState) -> Result<Decision> {
        let handle = self.handle(&state.game.id)?;
        handle.decide(state).await
    }

    /// Stops the game's actor and forgets the game. Turns already queued are
    /// still answered.
    pub fn end(&self, game_id: &str) -> Result<()> {
        let handle = self
            .games
            .lock()
            .remove(game_id)
            .ok_or_else(|| EngineError::UntrackedGame(game_id.to_string()))?;

        if !handle.end() {
            warn!("Game {}: actor had already stopped", handle.game_id());
        }
        info!("Deleting game {} ({} left)", game_id, self.len());
        Ok(())
    }

    fn handle(&self, game_id: &str) -> Result<ActorHandle> {
        self.games
            .lock()
            .get(game_id)
            .cloned()
            .ok_or_else(|| EngineError::UntrackedGame(game_id.to_string()))
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.games.lock().contains_key(game_id)
    }

    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }

    /// Ids of all tracked games, sorted
    pub fn active_games(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.games.lock().keys().cloned().collect();
        ids.sort();
        ids
    }
}
