use thiserror::Error;

/// Misuse of the game or agent contracts. These are programming errors: they are surfaced
/// immediately and never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractViolation {
    #[error("agent `{agent}` was asked to move before a match began")]
    UnboundAgent { agent: String },

    #[error("agent `{agent}` has no move to offer")]
    NoDecision { agent: String },

    #[error("no agent is bound to player {player}")]
    UnboundPlayer { player: String },

    #[error("player {player} is bound to more than one agent")]
    DuplicatePlayer { player: String },

    #[error("player {player} is not declared by the game")]
    UndeclaredPlayer { player: String },

    #[error("{agents} agents given for a game with {players} players")]
    TooManyAgents { agents: usize, players: usize },

    #[error("non-terminal state has no active player: {state}")]
    NoActivePlayer { state: String },

    #[error("state has neither moves nor results: {state}")]
    NoMovesNorResults { state: String },

    #[error("state has both moves and results: {state}")]
    MovesAndResults { state: String },

    #[error("results do not sum to zero ({sum}): {state}")]
    NonZeroSum { state: String, sum: f64 },

    #[error("results have no entry for player {player}")]
    MissingResult { player: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("match stopped before ply {ply}")]
    Stopped { ply: u32 },

    #[error("match ended without a terminal record")]
    Unfinished,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
