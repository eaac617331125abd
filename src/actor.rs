// One decision actor per running game
//
// Each actor is a tokio task draining its own mailbox. A turn is fully
// decided and answered before the next message is read, so turns of one game
// never overlap while different games run side by side.

use log::{debug, error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};

use crate::config::{Config, PolicyConfig, TimingConfig};
use crate::display::render_board;
use crate::error::{EngineError, Result};
use crate::pathfinding::Deadline;
use crate::policy;
use crate::types::{Direction, GameState};

/// Answer to one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    /// Turn number of the snapshot this answers
    pub turn: i32,
    /// How many turns this actor has taken, counting this one
    pub sequence: u64,
    pub elapsed: Duration,
}

/// Lifecycle of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    Idle,
    Deciding,
    Terminated,
}

/// The slice of configuration an actor needs
#[derive(Debug, Clone)]
pub struct ActorSettings {
    pub policy: PolicyConfig,
    pub timing: TimingConfig,
    pub print_board: bool,
}

impl From<&Config> for ActorSettings {
    fn from(config: &Config) -> Self {
        ActorSettings {
            policy: config.policy.clone(),
            timing: config.timing.clone(),
            print_board: config.debug.print_board,
        }
    }
}

enum Message {
    Turn {
        state: Box<GameState>,
        reply: oneshot::Sender<Result<Decision>>,
    },
    End,
}

/// Sending side of an actor's mailbox
#[derive(Clone)]
pub struct ActorHandle {
    game_id: String,
    tx: mpsc::UnboundedSender<Message>,
}

impl ActorHandle {
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Queues a turn and waits for its decision
    pub async fn decide(&self, state: GameState) -> Result<Decision> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Message::Turn {
                state: Box::new(state),
                reply,
            })
            .map_err(|_| EngineError::ActorStopped(self.game_id.clone()))?;

        response
            .await
            .map_err(|_| EngineError::ActorStopped(self.game_id.clone()))?
    }

    /// Asks the actor to stop once queued turns are done.
    /// Returns false if it had already stopped.
    pub fn end(&self) -> bool {
        self.tx.send(Message::End).is_ok()
    }

    pub fn is_stopped(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Starts an actor for `game_id` on the current tokio runtime
pub fn spawn(game_id: String, settings: Arc<ActorSettings>) -> ActorHandle {
    let (tx, inbox) = mpsc::unbounded_channel();
    let actor = DecisionActor {
        game_id: game_id.clone(),
        settings,
        inbox,
        state: ActorState::Idle,
        turns_taken: 0,
    };
    tokio::spawn(actor.run());

    ActorHandle { game_id, tx }
}

struct DecisionActor {
    game_id: String,
    settings: Arc<ActorSettings>,
    inbox: mpsc::UnboundedReceiver<Message>,
    state: ActorState,
    turns_taken: u64,
}

impl DecisionActor {
    async fn run(mut self) {
        info!("Game {}: decision actor started", self.game_id);

        while let Some(message) = self.inbox.recv().await {
            match message {
                Message::Turn { state, reply } => {
                    self.transition(ActorState::Deciding);
                    let result = self.take_turn(*state).await;
                    if reply.send(result).is_err() {
                        debug!("Game {}: caller went away before the decision", self.game_id);
                    }
                    self.transition(ActorState::Idle);
                }
                Message::End => break,
            }
        }

        self.inbox.close();
        self.transition(ActorState::Terminated);
        info!(
            "Game {}: snake ended after {} turns",
            self.game_id, self.turns_taken
        );
    }

    fn transition(&mut self, next: ActorState) {
        debug!("Game {}: {:?} -> {:?}", self.game_id, self.state, next);
        self.state = next;
    }

    async fn take_turn(&mut self, state: GameState) -> Result<Decision> {
        let started = Instant::now();
        let deadline = Deadline::after(self.settings.timing.turn_budget(state.game.timeout));
        self.turns_taken += 1;
        let sequence = self.turns_taken;
        let turn = state.turn;

        if self.settings.print_board {
            debug!("Game {}:\n{}", self.game_id, render_board(&state));
        }
        debug!("{} got request to make move decision", state.you.name);

        let settings = Arc::clone(&self.settings);
        let direction = tokio::task::spawn_blocking(move || {
            policy::decide(&state, &settings.policy, &deadline)
        })
        .await
        .map_err(|e| {
            error!("Game {}: decision task failed: {}", self.game_id, e);
            EngineError::ActorStopped(self.game_id.clone())
        })??;

        Ok(Decision {
            direction,
            turn,
            sequence,
            elapsed: started.elapsed(),
        })
    }
}
