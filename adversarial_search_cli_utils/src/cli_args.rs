use std::{fmt::Display, str::FromStr};
use structopt::StructOpt;

use adversarial_search::{
    game_tree_search::Game,
    games::{Cuanteti, Silly, TicTacToe, ToadsAndFrogs},
    rng::RngSource,
};
use adversarial_search_strategies::{
    AlphaBetaAgent, MCTSAgent, MCTSConfig, MiniMaxAgent, MiniMaxConfig, RandomAgent, Strategy,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchAlgorithm {
    Random,
    MiniMax,
    AlphaBeta,
    MCTS,
}

impl FromStr for SearchAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "minimax" => Ok(Self::MiniMax),
            "alphabeta" | "alpha-beta" => Ok(Self::AlphaBeta),
            "mcts" => Ok(Self::MCTS),
            _ => Err(format!("unknown algorithm `{s}`, expected random|minimax|alphabeta|mcts")),
        }
    }
}

impl Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::MiniMax => "minimax",
            Self::AlphaBeta => "alphabeta",
            Self::MCTS => "mcts",
        })
    }
}

/// An algorithm with its optional size parameter: the horizon for minimax and alpha-beta,
/// the simulation count for MCTS. Written `algorithm[:param]`, e.g. `alphabeta:4`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpec {
    pub algorithm: SearchAlgorithm,
    pub param: Option<u32>,
}

impl AgentSpec {
    pub const DEFAULT: AgentSpec = AgentSpec {
        algorithm: SearchAlgorithm::AlphaBeta,
        param: None,
    };

    pub fn new(algorithm: SearchAlgorithm, param: Option<u32>) -> Self {
        Self { algorithm, param }
    }

    /// Builds the described agent.
    /// `playout_cutoff` only applies to MCTS.
    pub fn make_strategy<G: StandardGame>(
        &self,
        name: impl Into<String>,
        playout_cutoff: Option<u32>,
        rng: impl Into<RngSource>,
    ) -> Strategy<G> {
        let strategy: Strategy<G> = match self.algorithm {
            SearchAlgorithm::Random => RandomAgent::new(name, rng).into(),
            SearchAlgorithm::MiniMax => MiniMaxAgent::new(name, self.minimax_config(), rng).into(),
            SearchAlgorithm::AlphaBeta => AlphaBetaAgent::new(name, self.minimax_config(), rng).into(),
            SearchAlgorithm::MCTS => {
                let config = MCTSConfig {
                    simulation_count: self.param.unwrap_or(MCTSConfig::default().simulation_count),
                    playout_cutoff,
                };
                MCTSAgent::new(name, config, rng).into()
            }
        };
        G::with_standard_heuristic(strategy)
    }

    fn minimax_config(&self) -> MiniMaxConfig {
        self.param.map(MiniMaxConfig::new).unwrap_or_default()
    }
}

impl Default for AgentSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for AgentSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (algorithm, param) = match s.split_once(':') {
            Some((algorithm, param)) => {
                let param = param
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("invalid parameter in `{s}`: {e}"))?;
                (algorithm, Some(param))
            }
            None => (s, None),
        };
        let algorithm: SearchAlgorithm = algorithm.trim().parse()?;
        if algorithm == SearchAlgorithm::Random && param.is_some() {
            return Err(format!("`random` takes no parameter: `{s}`"));
        }
        Ok(Self { algorithm, param })
    }
}

impl Display for AgentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.param {
            Some(param) => write!(f, "{}:{param}", self.algorithm),
            None => write!(f, "{}", self.algorithm),
        }
    }
}

/// Games that can be selected from the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameKind {
    Silly,
    TicTacToe,
    ToadsAndFrogs,
    Cuanteti,
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "silly" => Ok(Self::Silly),
            "tictactoe" | "tic_tac_toe" => Ok(Self::TicTacToe),
            "toads_and_frogs" | "toadsandfrogs" => Ok(Self::ToadsAndFrogs),
            "cuanteti" => Ok(Self::Cuanteti),
            _ => Err(format!(
                "unknown game `{s}`, expected silly|tictactoe|toads_and_frogs|cuanteti"
            )),
        }
    }
}

impl Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Silly => "silly",
            Self::TicTacToe => "tictactoe",
            Self::ToadsAndFrogs => "toads_and_frogs",
            Self::Cuanteti => "cuanteti",
        })
    }
}

/// A game with a standard starting position and, optionally, a heuristic better than the
/// random default.
pub trait StandardGame: Game {
    fn standard_game() -> Self;

    fn with_standard_heuristic(strategy: Strategy<Self>) -> Strategy<Self> {
        strategy
    }
}

impl StandardGame for Silly {
    fn standard_game() -> Self {
        Silly::new()
    }
}

impl StandardGame for TicTacToe {
    fn standard_game() -> Self {
        TicTacToe::new()
    }

    fn with_standard_heuristic(strategy: Strategy<Self>) -> Strategy<Self> {
        strategy.with_heuristic(TicTacToe::simple_heuristic)
    }
}

impl StandardGame for ToadsAndFrogs {
    fn standard_game() -> Self {
        ToadsAndFrogs::default()
    }
}

impl StandardGame for Cuanteti {
    fn standard_game() -> Self {
        Cuanteti::new()
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct SearchConfig {
    #[structopt(
        short = "A",
        long = "--agent",
        help = "random|minimax[:horizon]|alphabeta[:horizon]|mcts[:simulations]: the agent under test."
    )]
    pub agent: Option<AgentSpec>,

    #[structopt(long = "--playout-cutoff", help = "MCTS: max plies per random playout")]
    pub playout_cutoff: Option<u32>,

    #[structopt(short = "D", long = "--debug", help = "Log every ply and search summary")]
    pub debug: bool,
}

impl SearchConfig {
    #[inline]
    pub fn agent_spec(&self) -> AgentSpec {
        self.agent.unwrap_or_default()
    }

    pub fn make_strategy<G: StandardGame>(&self, name: impl Into<String>, rng: impl Into<RngSource>) -> Strategy<G> {
        self.agent_spec().make_strategy(name, self.playout_cutoff, rng)
    }
}

#[derive(Debug, StructOpt, Clone)]
pub struct SearchOpts {
    #[structopt(
        short = "g",
        long = "--game",
        default_value = "tictactoe",
        help = "silly|tictactoe|toads_and_frogs|cuanteti"
    )]
    pub game: GameKind,

    #[structopt(
        short = "S",
        long = "--seed",
        help = "Random seed for the agents. Without it, agents draw from entropy."
    )]
    pub seed: Option<u64>,

    #[structopt(flatten)]
    pub search: SearchConfig,
}

impl SearchOpts {
    /// Seed source for the `index`-th agent created from these options.
    pub fn rng_source(&self, index: u64) -> RngSource {
        self.seed.map(|seed| seed.wrapping_add(index)).into()
    }

    pub fn make_strategy<G: StandardGame>(&self, name: impl Into<String>, index: u64) -> Strategy<G> {
        self.search.make_strategy(name, self.rng_source(index))
    }
}
