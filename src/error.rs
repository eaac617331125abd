use thiserror::Error;

/// Everything that can go wrong between receiving a snapshot and answering it
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to parse game state: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not find game with ID '{0}'")]
    UntrackedGame(String),

    #[error("no food on the board")]
    NoFood,

    #[error("no legal move on turn {turn}")]
    NoLegalMove { turn: i32 },

    #[error("turn deadline exceeded")]
    DeadlineExceeded,

    #[error("decision actor for game '{0}' has stopped")]
    ActorStopped(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
