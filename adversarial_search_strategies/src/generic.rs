use crate::*;

/// Any of the search strategies behind one agent type.
#[derive(Debug, Clone)]
pub enum Strategy<G: Game> {
    Random(RandomAgent<G>),
    MiniMax(MiniMaxAgent<G>),
    AlphaBeta(AlphaBetaAgent<G>),
    Mcts(MCTSAgent<G>),
}

macro_rules! delegate {
    ($self: expr, $agent: ident => $body: expr) => {
        match $self {
            Strategy::Random($agent) => $body,
            Strategy::MiniMax($agent) => $body,
            Strategy::AlphaBeta($agent) => $body,
            Strategy::Mcts($agent) => $body,
        }
    };
}

impl<G: Game> Strategy<G> {
    /// Work done by the most recent decision. Random choices do no search.
    pub fn last_counter(&self) -> SearchCounter {
        match self {
            Strategy::Random(_) => SearchCounter::default(),
            Strategy::MiniMax(agent) => agent.last_counter(),
            Strategy::AlphaBeta(agent) => agent.last_counter(),
            Strategy::Mcts(agent) => agent.last_counter(),
        }
    }

    pub fn with_heuristic<F>(self, heuristic: F) -> Self
    where
        F: Fn(&G::Player, &G, u32) -> f64 + Send + Sync + 'static,
    {
        match self {
            Strategy::Random(agent) => Strategy::Random(agent),
            Strategy::MiniMax(agent) => Strategy::MiniMax(agent.with_heuristic(heuristic)),
            Strategy::AlphaBeta(agent) => Strategy::AlphaBeta(agent.with_heuristic(heuristic)),
            Strategy::Mcts(agent) => Strategy::Mcts(agent.with_heuristic(heuristic)),
        }
    }
}

impl<G: Game> From<RandomAgent<G>> for Strategy<G> {
    fn from(agent: RandomAgent<G>) -> Self {
        Strategy::Random(agent)
    }
}

impl<G: Game> From<MiniMaxAgent<G>> for Strategy<G> {
    fn from(agent: MiniMaxAgent<G>) -> Self {
        Strategy::MiniMax(agent)
    }
}

impl<G: Game> From<AlphaBetaAgent<G>> for Strategy<G> {
    fn from(agent: AlphaBetaAgent<G>) -> Self {
        Strategy::AlphaBeta(agent)
    }
}

impl<G: Game> From<MCTSAgent<G>> for Strategy<G> {
    fn from(agent: MCTSAgent<G>) -> Self {
        Strategy::Mcts(agent)
    }
}

impl<G: Game> Agent<G> for Strategy<G> {
    fn seat(&self) -> &Seat<G::Player> {
        delegate!(self, agent => agent.seat())
    }

    fn seat_mut(&mut self) -> &mut Seat<G::Player> {
        delegate!(self, agent => agent.seat_mut())
    }

    fn decision(&mut self, game: &G, candidates: &[G::Move]) -> Result<G::Move, Error> {
        delegate!(self, agent => agent.decision(game, candidates))
    }
}
